//! Interaction surface
//!
//! Everything a behavior can subscribe to or ask the host for: DOM event
//! listeners, intersection observers, timers, the viewport and its layout
//! boxes, plus outgoing scroll and image requests. Subscriptions carry the
//! owning `UnitId` so the page can route notifications back.

mod events;
mod keyboard;
mod observer;
mod timers;
mod viewport;

pub use events::{Event, EventRegistry, EventType, ListenerOptions};
pub use keyboard::Key;
pub use observer::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverManager,
    IntersectionObserverOptions, MarginLength, ObserverId, RootMargin, RootMarginError,
};
pub use timers::{Timer, TimerId, TimerManager};
pub use viewport::{ImageRequest, Layout, ScrollBehavior, ScrollRequest, Viewport};

use pagewire_dom::NodeId;

/// The page behaviors, also used as subscription owners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UnitId {
    Modal,
    ScrollTo,
    Tabs,
    NavFade,
    Sticky,
    Reveal,
    LazyImages,
    Carousel,
}

impl UnitId {
    pub const ALL: [UnitId; 8] = [
        UnitId::Modal,
        UnitId::ScrollTo,
        UnitId::Tabs,
        UnitId::NavFade,
        UnitId::Sticky,
        UnitId::Reveal,
        UnitId::LazyImages,
        UnitId::Carousel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UnitId::Modal => "modal",
            UnitId::ScrollTo => "scroll-to",
            UnitId::Tabs => "tabs",
            UnitId::NavFade => "nav-fade",
            UnitId::Sticky => "sticky-header",
            UnitId::Reveal => "section-reveal",
            UnitId::LazyImages => "lazy-images",
            UnitId::Carousel => "carousel",
        }
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A listener identity: owning unit plus a unit-defined slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId {
    pub unit: UnitId,
    pub slot: u16,
}

impl HandlerId {
    pub fn new(unit: UnitId, slot: u16) -> Self {
        Self { unit, slot }
    }
}

/// All host-side capabilities in one place
#[derive(Debug, Default)]
pub struct Surface {
    pub events: EventRegistry,
    pub observers: IntersectionObserverManager,
    pub timers: TimerManager,
    pub layout: Layout,
    scroll_requests: Vec<ScrollRequest>,
    image_requests: Vec<ImageRequest>,
}

impl Surface {
    pub fn new(layout: Layout) -> Self {
        Self { layout, ..Self::default() }
    }

    /// Queue a `scrollIntoView` for the host
    pub fn scroll_into_view(&mut self, target: NodeId, behavior: ScrollBehavior) {
        self.scroll_requests.push(ScrollRequest { target, behavior });
    }

    /// Queue an image fetch for the host
    pub fn request_image(&mut self, target: NodeId, url: String) {
        self.image_requests.push(ImageRequest { target, url });
    }

    pub fn take_scroll_requests(&mut self) -> Vec<ScrollRequest> {
        std::mem::take(&mut self.scroll_requests)
    }

    pub fn take_image_requests(&mut self) -> Vec<ImageRequest> {
        std::mem::take(&mut self.image_requests)
    }
}
