//! Viewport, layout boxes and host-facing requests
//!
//! The host renders the page; it reports element boxes (document
//! coordinates) and the scroll position here, and drains the scroll and
//! image requests the behaviors issue.

use std::collections::HashMap;

use pagewire_dom::{DOMRect, NodeId};

/// Scrollable viewport in document coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_x: f64,
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { scroll_x: 0.0, scroll_y: 0.0, width, height }
    }

    /// Visible area as a document-space rect
    pub fn rect(&self) -> DOMRect {
        DOMRect::from_xywh(self.scroll_x, self.scroll_y, self.width, self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// Element layout boxes reported by the host
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub viewport: Viewport,
    rects: HashMap<NodeId, DOMRect>,
}

impl Layout {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, rects: HashMap::new() }
    }

    /// Builder-style `set_rect`
    pub fn with_rect(mut self, node: NodeId, rect: DOMRect) -> Self {
        self.set_rect(node, rect);
        self
    }

    pub fn set_rect(&mut self, node: NodeId, rect: DOMRect) {
        self.rects.insert(node, rect);
    }

    pub fn rect(&self, node: NodeId) -> Option<DOMRect> {
        self.rects.get(&node).copied()
    }

    pub fn rects(&self) -> &HashMap<NodeId, DOMRect> {
        &self.rects
    }
}

/// `scrollIntoView` behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
}

/// A pending `scrollIntoView` call for the host to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: NodeId,
    pub behavior: ScrollBehavior,
}

/// A pending image fetch, issued when a lazy image swaps in its real source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub target: NodeId,
    /// Absolute URL when the document has a base URL, else the raw source
    pub url: String,
}
