//! Page - the host-facing runtime
//!
//! Owns the document, the interaction surface and every attached unit. The
//! host drives it: dispatch input events, report scroll and layout changes,
//! complete image loads, advance the clock, and drain the requests the units
//! leave behind.

use pagewire_dom::{DOMRect, Document, DomTree, NodeId};

use crate::behaviors::{
    Behavior, Carousel, Context, LazyImages, Modal, NavFade, Reveal, ScrollTo, Sticky, Tabs,
};
use crate::config::PageConfig;
use crate::elements::PageElements;
use crate::error::SetupError;
use crate::surface::{
    Event, EventRegistry, ImageRequest, Key, Layout, ScrollRequest, Surface, TimerId, UnitId, Viewport,
};

/// Attached units; `None` for an inert one
#[derive(Debug, Default)]
struct Units {
    modal: Option<Modal>,
    scroll_to: Option<ScrollTo>,
    tabs: Option<Tabs>,
    nav_fade: Option<NavFade>,
    sticky: Option<Sticky>,
    reveal: Option<Reveal>,
    lazy_images: Option<LazyImages>,
    carousel: Option<Carousel>,
}

impl Units {
    fn get_mut(&mut self, unit: UnitId) -> Option<&mut dyn Behavior> {
        match unit {
            UnitId::Modal => self.modal.as_mut().map(|u| u as &mut dyn Behavior),
            UnitId::ScrollTo => self.scroll_to.as_mut().map(|u| u as &mut dyn Behavior),
            UnitId::Tabs => self.tabs.as_mut().map(|u| u as &mut dyn Behavior),
            UnitId::NavFade => self.nav_fade.as_mut().map(|u| u as &mut dyn Behavior),
            UnitId::Sticky => self.sticky.as_mut().map(|u| u as &mut dyn Behavior),
            UnitId::Reveal => self.reveal.as_mut().map(|u| u as &mut dyn Behavior),
            UnitId::LazyImages => self.lazy_images.as_mut().map(|u| u as &mut dyn Behavior),
            UnitId::Carousel => self.carousel.as_mut().map(|u| u as &mut dyn Behavior),
        }
    }

    fn is_attached(&self, unit: UnitId) -> bool {
        match unit {
            UnitId::Modal => self.modal.is_some(),
            UnitId::ScrollTo => self.scroll_to.is_some(),
            UnitId::Tabs => self.tabs.is_some(),
            UnitId::NavFade => self.nav_fade.is_some(),
            UnitId::Sticky => self.sticky.is_some(),
            UnitId::Reveal => self.reveal.is_some(),
            UnitId::LazyImages => self.lazy_images.is_some(),
            UnitId::Carousel => self.carousel.is_some(),
        }
    }
}

/// A landing page with its behaviors attached
#[derive(Debug)]
pub struct Page {
    document: Document,
    surface: Surface,
    config: PageConfig,
    units: Units,
    inert: Vec<(UnitId, SetupError)>,
}

impl Page {
    /// Attach every unit to `document`.
    ///
    /// `layout` must already hold the boxes the units measure at setup (the
    /// nav height for the sticky header). Units whose markup is missing stay
    /// inert; the initial intersection check runs before this returns.
    pub fn new(document: Document, layout: Layout, config: PageConfig) -> Self {
        let elements = PageElements::resolve(&document, &config);
        let mut page = Self {
            document,
            surface: Surface::new(layout),
            config,
            units: Units::default(),
            inert: Vec::new(),
        };
        page.attach(elements);
        tracing::info!(
            attached = UnitId::ALL.len() - page.inert.len(),
            inert = page.inert.len(),
            "page ready"
        );
        page.check_intersections();
        page
    }

    fn attach(&mut self, elements: PageElements) {
        let Self { document, surface, config, units, inert } = self;
        let mut slot = Attacher { document, surface, inert };

        units.modal = slot.attach(UnitId::Modal, elements.modal, |cx, e| {
            Ok(Modal::attach(cx, e, &config.modal))
        });
        units.scroll_to = slot.attach(UnitId::ScrollTo, elements.scroll_to, |cx, e| {
            Ok(ScrollTo::attach(cx, e, &config.scroll_to))
        });
        units.tabs = slot.attach(UnitId::Tabs, elements.tabs, |cx, e| Tabs::attach(cx, e, &config.tabs));
        units.nav_fade = slot.attach(UnitId::NavFade, elements.nav, |cx, e| NavFade::attach(cx, e, &config.nav));
        units.sticky = slot.attach(UnitId::Sticky, elements.sticky, |cx, e| {
            Ok(Sticky::attach(cx, e, &config.sticky))
        });
        units.reveal = slot.attach(UnitId::Reveal, elements.reveal, |cx, e| {
            Ok(Reveal::attach(cx, e, &config.reveal))
        });
        units.lazy_images = slot.attach(UnitId::LazyImages, elements.lazy_images, |cx, e| {
            LazyImages::attach(cx, e, &config.lazy_images)
        });
        units.carousel = slot.attach(UnitId::Carousel, elements.carousel, |cx, e| {
            Carousel::attach(cx, e, &config.carousel)
        });
    }

    /// Run `f` against an attached unit with a context owned by it
    fn with_unit(&mut self, unit: UnitId, f: impl FnOnce(&mut dyn Behavior, &mut Context<'_>)) {
        let Some(behavior) = self.units.get_mut(unit) else {
            return;
        };
        let mut cx = Context::new(&mut self.document, &mut self.surface, unit);
        f(behavior, &mut cx);
    }

    // --- input ---

    /// Dispatch an event at its target, bubbling when its type does.
    ///
    /// Returns the event as delivered, stamped with the clock time.
    pub fn dispatch(&mut self, mut event: Event) -> Event {
        if self.document.tree().get(event.target).is_none() {
            tracing::debug!(node = %event.target, "event target not in document");
            return event;
        }
        event.timestamp = self.surface.timers.now() as f64;
        tracing::trace!(event_type = ?event.event_type, node = %event.target, "dispatch");

        for node in EventRegistry::propagation_path(self.document.tree(), &event) {
            let handlers = self.surface.events.take_for_dispatch(node, event.event_type);
            event.current_target = node;
            for handler in handlers {
                self.with_unit(handler.unit, |behavior, cx| {
                    behavior.handle_event(cx, handler.slot, &event);
                });
            }
        }
        event
    }

    pub fn click(&mut self, target: NodeId) -> Event {
        self.dispatch(Event::click(target))
    }

    /// Key press with focus on the body
    pub fn key_down(&mut self, key: Key) -> Event {
        let body = self.document.body();
        self.dispatch(Event::key_down(body, key))
    }

    pub fn mouse_over(&mut self, target: NodeId) -> Event {
        self.dispatch(Event::mouse_over(target))
    }

    pub fn mouse_out(&mut self, target: NodeId) -> Event {
        self.dispatch(Event::mouse_out(target))
    }

    /// The host finished fetching an image requested earlier
    pub fn complete_image_load(&mut self, image: NodeId) -> Event {
        self.dispatch(Event::load(image))
    }

    // --- geometry ---

    /// Scroll the viewport to a vertical document offset
    pub fn set_scroll(&mut self, scroll_y: f64) {
        self.surface.layout.viewport.scroll_y = scroll_y.max(0.0);
        self.check_intersections();
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        let viewport = &mut self.surface.layout.viewport;
        viewport.width = width;
        viewport.height = height;
        self.check_intersections();
    }

    /// Report a new layout box for `node`
    pub fn set_layout_rect(&mut self, node: NodeId, rect: DOMRect) {
        self.surface.layout.set_rect(node, rect);
        self.check_intersections();
    }

    /// Run every observer against the current layout and deliver entries
    pub fn check_intersections(&mut self) {
        let time = self.surface.timers.now() as f64;
        let viewport = self.surface.layout.viewport.rect();
        let batches = self
            .surface
            .observers
            .process(viewport, self.surface.layout.rects(), time);

        for (observer, unit, entries) in batches {
            tracing::trace!(%unit, entries = entries.len(), "intersection entries");
            self.with_unit(unit, |behavior, cx| {
                behavior.handle_intersections(cx, observer, &entries);
            });
        }
    }

    // --- time ---

    /// Advance the virtual clock, firing due timers in order
    pub fn advance_time(&mut self, ms: u64) {
        let deadline = self.surface.timers.now().saturating_add(ms);
        while let Some(timer) = self.surface.timers.fire_next(deadline) {
            tracing::trace!(timer = ?timer.id, unit = %timer.owner, "timer fired");
            self.with_unit(timer.owner, |behavior, cx| behavior.handle_timer(cx, timer.id));
        }
    }

    pub fn now(&self) -> u64 {
        self.surface.timers.now()
    }

    pub fn clear_timer(&mut self, timer: TimerId) -> bool {
        self.surface.timers.clear(timer)
    }

    // --- host requests ---

    /// Drain pending smooth-scroll requests
    pub fn take_scroll_requests(&mut self) -> Vec<ScrollRequest> {
        self.surface.take_scroll_requests()
    }

    /// Drain pending image fetches
    pub fn take_image_requests(&mut self) -> Vec<ImageRequest> {
        self.surface.take_image_requests()
    }

    // --- accessors ---

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn tree(&self) -> &DomTree {
        self.document.tree()
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn viewport(&self) -> Viewport {
        self.surface.layout.viewport
    }

    /// Units that failed setup, with the reason
    pub fn inert_units(&self) -> &[(UnitId, SetupError)] {
        &self.inert
    }

    pub fn is_attached(&self, unit: UnitId) -> bool {
        self.units.is_attached(unit)
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.units.modal.as_ref()
    }

    pub fn scroll_to(&self) -> Option<&ScrollTo> {
        self.units.scroll_to.as_ref()
    }

    pub fn tabs(&self) -> Option<&Tabs> {
        self.units.tabs.as_ref()
    }

    pub fn nav_fade(&self) -> Option<&NavFade> {
        self.units.nav_fade.as_ref()
    }

    pub fn sticky(&self) -> Option<&Sticky> {
        self.units.sticky.as_ref()
    }

    pub fn reveal(&self) -> Option<&Reveal> {
        self.units.reveal.as_ref()
    }

    pub fn lazy_images(&self) -> Option<&LazyImages> {
        self.units.lazy_images.as_ref()
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        self.units.carousel.as_ref()
    }
}

/// Attaches units one by one, recording the ones that fail
struct Attacher<'a> {
    document: &'a mut Document,
    surface: &'a mut Surface,
    inert: &'a mut Vec<(UnitId, SetupError)>,
}

impl Attacher<'_> {
    fn attach<E, B>(
        &mut self,
        unit: UnitId,
        elements: Result<E, SetupError>,
        attach: impl FnOnce(&mut Context<'_>, E) -> Result<B, SetupError>,
    ) -> Option<B> {
        let result = elements.and_then(|elements| {
            let mut cx = Context::new(&mut *self.document, &mut *self.surface, unit);
            attach(&mut cx, elements)
        });
        match result {
            Ok(behavior) => {
                tracing::debug!(%unit, "unit attached");
                Some(behavior)
            }
            Err(err) => {
                tracing::warn!(%unit, %err, "unit setup failed, leaving it inert");
                self.inert.push((unit, err));
                None
            }
        }
    }
}
