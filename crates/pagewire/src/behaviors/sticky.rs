//! Sticky navigation
//!
//! Observes the header with the viewport shrunk by the nav's height on every
//! side, so the nav turns sticky exactly when the header would scroll under
//! it. No scroll polling: the observer drives both transitions.

use pagewire_dom::{Document, DomTree, NodeId};

use super::{Behavior, Context};
use crate::config::{NavConfig, StickyConfig};
use crate::error::{self, SetupError};
use crate::surface::{
    IntersectionObserverEntry, IntersectionObserverOptions, MarginLength, ObserverId, RootMargin, UnitId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickyElements {
    pub nav: NodeId,
    pub header: NodeId,
}

impl StickyElements {
    pub fn resolve(document: &Document, nav: &NavConfig, config: &StickyConfig) -> Result<Self, SetupError> {
        Ok(Self {
            nav: error::require(document, &nav.nav)?,
            header: error::require(document, &config.header)?,
        })
    }
}

#[derive(Debug)]
pub struct Sticky {
    elements: StickyElements,
    sticky_class: String,
    observer: ObserverId,
}

impl Sticky {
    pub fn attach(cx: &mut Context<'_>, elements: StickyElements, config: &StickyConfig) -> Self {
        let nav_height = cx.client_height(elements.nav);
        let options = IntersectionObserverOptions::with_threshold(0.0)
            .root_margin(RootMargin::uniform(MarginLength::Px(-nav_height)));
        tracing::debug!(root_margin = %options.root_margin, "sticky header observer");

        let observer = cx.create_observer(options);
        cx.observe(observer, elements.header);

        Self {
            elements,
            sticky_class: config.sticky_class.clone(),
            observer,
        }
    }

    pub fn is_sticky(&self, tree: &DomTree) -> bool {
        tree.has_class(self.elements.nav, &self.sticky_class)
    }
}

impl Behavior for Sticky {
    fn id(&self) -> UnitId {
        UnitId::Sticky
    }

    fn handle_intersections(
        &mut self,
        cx: &mut Context<'_>,
        observer: ObserverId,
        entries: &[IntersectionObserverEntry],
    ) {
        if observer != self.observer {
            return;
        }
        // Only the latest state of the header matters
        let Some(entry) = entries.iter().rev().find(|e| e.target == self.elements.header) else {
            return;
        };
        let tree = cx.tree_mut();
        if entry.is_intersecting {
            tree.remove_class(self.elements.nav, &self.sticky_class);
        } else {
            tree.add_class(self.elements.nav, &self.sticky_class);
        }
        tracing::debug!(sticky = !entry.is_intersecting, "nav state");
    }
}
