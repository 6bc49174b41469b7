//! Page behaviors
//!
//! Each unit resolves its elements once, subscribes through a `Context`,
//! and afterwards only reacts to the notifications routed back to it.

mod carousel;
mod lazy_images;
mod modal;
mod nav_fade;
mod reveal;
mod scroll_to;
mod sticky;
mod tabs;

pub use carousel::{Carousel, CarouselElements};
pub use lazy_images::{LazyImageElements, LazyImageState, LazyImages};
pub use modal::{Modal, ModalElements};
pub use nav_fade::{NavElements, NavFade};
pub use reveal::{Reveal, RevealElements};
pub use scroll_to::{ScrollTo, ScrollToElements};
pub use sticky::{Sticky, StickyElements};
pub use tabs::{TabElements, Tabs};

use pagewire_dom::{Document, DomTree, NodeId};

use crate::surface::{
    Event, EventType, HandlerId, IntersectionObserverEntry, IntersectionObserverOptions,
    ListenerOptions, ObserverId, ScrollBehavior, Surface, TimerId, UnitId,
};

/// A page behavior unit
pub trait Behavior: std::fmt::Debug {
    fn id(&self) -> UnitId;

    /// A listener registered with `slot` fired
    fn handle_event(&mut self, _cx: &mut Context<'_>, _slot: u16, _event: &Event) {}

    /// An observer created by this unit has entries, in observe() order
    fn handle_intersections(
        &mut self,
        _cx: &mut Context<'_>,
        _observer: ObserverId,
        _entries: &[IntersectionObserverEntry],
    ) {
    }

    /// A timer created by this unit fired
    fn handle_timer(&mut self, _cx: &mut Context<'_>, _timer: TimerId) {}
}

/// Mutable view of the page handed to one unit
pub struct Context<'a> {
    pub document: &'a mut Document,
    pub surface: &'a mut Surface,
    owner: UnitId,
}

impl<'a> Context<'a> {
    pub fn new(document: &'a mut Document, surface: &'a mut Surface, owner: UnitId) -> Self {
        Self { document, surface, owner }
    }

    pub fn owner(&self) -> UnitId {
        self.owner
    }

    pub fn tree(&self) -> &DomTree {
        self.document.tree()
    }

    pub fn tree_mut(&mut self) -> &mut DomTree {
        self.document.tree_mut()
    }

    /// addEventListener on behalf of the owning unit
    pub fn listen(&mut self, target: NodeId, event_type: EventType, slot: u16) -> bool {
        self.surface.events.add_listener(
            target,
            event_type,
            HandlerId::new(self.owner, slot),
            ListenerOptions::default(),
        )
    }

    /// addEventListener with `{ once: true }`
    pub fn listen_once(&mut self, target: NodeId, event_type: EventType, slot: u16) -> bool {
        self.surface.events.add_listener(
            target,
            event_type,
            HandlerId::new(self.owner, slot),
            ListenerOptions { once: true },
        )
    }

    /// new IntersectionObserver(...) owned by this unit
    pub fn create_observer(&mut self, options: IntersectionObserverOptions) -> ObserverId {
        self.surface.observers.create(self.owner, options)
    }

    pub fn observe(&mut self, observer: ObserverId, target: NodeId) {
        if let Some(o) = self.surface.observers.get_mut(observer) {
            o.observe(target);
        }
    }

    pub fn unobserve(&mut self, observer: ObserverId, target: NodeId) {
        if let Some(o) = self.surface.observers.get_mut(observer) {
            o.unobserve(target);
        }
    }

    pub fn set_interval(&mut self, delay_ms: u64) -> TimerId {
        self.surface.timers.set_interval(self.owner, delay_ms)
    }

    pub fn scroll_into_view(&mut self, target: NodeId, behavior: ScrollBehavior) {
        self.surface.scroll_into_view(target, behavior);
    }

    /// Rendered height of an element, 0 when it has no layout box
    pub fn client_height(&self, node: NodeId) -> f64 {
        self.surface.layout.rect(node).map_or(0.0, |r| r.height)
    }
}

/// Format an opacity the way `style.opacity = n` serializes it.
///
/// Non-finite values fall back to fully opaque.
pub(crate) fn opacity_value(opacity: f64) -> String {
    let opacity = if opacity.is_finite() { opacity.clamp(0.0, 1.0) } else { 1.0 };
    format!("{opacity}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_value() {
        assert_eq!(opacity_value(0.5), "0.5");
        assert_eq!(opacity_value(1.0), "1");
        assert_eq!(opacity_value(3.0), "1");
        assert_eq!(opacity_value(-0.5), "0");
    }

    #[test]
    fn test_opacity_value_not_finite() {
        assert_eq!(opacity_value(f64::NAN), "1");
        assert_eq!(opacity_value(f64::INFINITY), "1");
        assert_eq!(opacity_value(f64::NEG_INFINITY), "1");
    }

    #[test]
    fn test_context_tags_owner() {
        let mut document = Document::default();
        let mut surface = Surface::default();
        let body = document.body();
        let mut cx = Context::new(&mut document, &mut surface, UnitId::Tabs);

        assert!(cx.listen(body, EventType::Click, 3));
        assert!(!cx.listen(body, EventType::Click, 3));
        assert_eq!(
            surface.events.handlers(body, EventType::Click),
            vec![HandlerId::new(UnitId::Tabs, 3)]
        );
    }
}
