//! Lazy-loading images
//!
//! Images start with a low-resolution `src`, the real source in a data
//! attribute and a blur class. When an image is half visible its source is
//! swapped and fetched through the host; the blur is removed only after the
//! load event, never earlier. Each image loads at most once.

use std::collections::HashMap;

use pagewire_dom::{Document, NodeId};
use url::Url;

use super::{Behavior, Context};
use crate::config::LazyImageConfig;
use crate::error::{self, SetupError};
use crate::surface::{
    Event, EventType, IntersectionObserverEntry, IntersectionObserverOptions, ObserverId, RootMargin, UnitId,
};

const LOAD: u16 = 0;

/// Per-image progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LazyImageState {
    /// Placeholder shown, not yet visible enough
    Pending,
    /// Real source requested, still blurred
    Loading,
    /// Real image shown
    Loaded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyImageElements {
    pub images: Vec<NodeId>,
}

impl LazyImageElements {
    pub fn resolve(document: &Document, config: &LazyImageConfig) -> Result<Self, SetupError> {
        Ok(Self {
            images: error::find_all(document, &config.image)?,
        })
    }
}

#[derive(Debug)]
pub struct LazyImages {
    states: HashMap<NodeId, LazyImageState>,
    source_attribute: String,
    placeholder_class: String,
    observer: ObserverId,
}

impl LazyImages {
    pub fn attach(
        cx: &mut Context<'_>,
        elements: LazyImageElements,
        config: &LazyImageConfig,
    ) -> Result<Self, SetupError> {
        let options = IntersectionObserverOptions::with_threshold(config.threshold)
            .root_margin(RootMargin::parse(&config.root_margin)?);
        let observer = cx.create_observer(options);

        let mut states = HashMap::with_capacity(elements.images.len());
        for &image in &elements.images {
            cx.observe(observer, image);
            states.insert(image, LazyImageState::Pending);
        }
        tracing::debug!(images = states.len(), "lazy images attached");

        Ok(Self {
            states,
            source_attribute: config.source_attribute.clone(),
            placeholder_class: config.placeholder_class.clone(),
            observer,
        })
    }

    /// Progress of one image, `None` if it is not managed here
    pub fn state(&self, image: NodeId) -> Option<LazyImageState> {
        self.states.get(&image).copied()
    }

    pub fn images(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.states.keys().copied()
    }

    fn start_loading(&mut self, cx: &mut Context<'_>, image: NodeId) {
        if self.state(image) != Some(LazyImageState::Pending) {
            return;
        }
        cx.unobserve(self.observer, image);

        let Some(source) = cx
            .tree()
            .attribute(image, &self.source_attribute)
            .map(|s| s.into_owned())
        else {
            tracing::warn!(%image, attribute = %self.source_attribute, "lazy image lost its source");
            return;
        };
        let url = resolve_url(cx.document.url(), &source);

        cx.tree_mut().set_attribute(image, "src", &source);
        cx.listen_once(image, EventType::Load, LOAD);
        cx.surface.request_image(image, url);
        self.states.insert(image, LazyImageState::Loading);
        tracing::debug!(%image, %source, "loading full image");
    }

    fn finish_loading(&mut self, cx: &mut Context<'_>, image: NodeId) {
        if self.state(image) != Some(LazyImageState::Loading) {
            return;
        }
        cx.tree_mut().remove_class(image, &self.placeholder_class);
        self.states.insert(image, LazyImageState::Loaded);
        tracing::debug!(%image, "image loaded");
    }
}

/// Resolve a source against the document URL, keeping it as written when
/// the document has no usable base
fn resolve_url(base: &str, source: &str) -> String {
    Url::parse(base)
        .and_then(|base| base.join(source))
        .map(String::from)
        .unwrap_or_else(|_| source.to_string())
}

impl Behavior for LazyImages {
    fn id(&self) -> UnitId {
        UnitId::LazyImages
    }

    fn handle_event(&mut self, cx: &mut Context<'_>, slot: u16, event: &Event) {
        if slot == LOAD {
            self.finish_loading(cx, event.target);
        }
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
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            self.start_loading(cx, entry.target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url_joins_relative() {
        assert_eq!(
            resolve_url("https://bankist.example/index.html", "img/digital.jpg"),
            "https://bankist.example/img/digital.jpg"
        );
    }

    #[test]
    fn test_resolve_url_keeps_absolute() {
        assert_eq!(
            resolve_url("https://bankist.example/", "https://cdn.example/a.jpg"),
            "https://cdn.example/a.jpg"
        );
    }

    #[test]
    fn test_resolve_url_without_base() {
        assert_eq!(resolve_url("about:blank", "img/card.jpg"), "img/card.jpg");
    }
}
