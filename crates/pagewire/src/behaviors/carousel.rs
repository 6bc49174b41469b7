//! Testimonial carousel
//!
//! Slides sit side by side and are shifted with `translateX` so the current
//! one lands at offset 0. Navigation wraps in both directions. One dot is
//! generated per slide; the dot of the current slide is the only active one.

use pagewire_dom::{DOMStringMap, Document, DomTree, NodeId, SelectorList};

use super::{Behavior, Context};
use crate::config::CarouselConfig;
use crate::error::{self, SetupError};
use crate::surface::{Event, EventType, Key, TimerId, UnitId};

const PREV: u16 = 0;
const NEXT: u16 = 1;
const KEYDOWN: u16 = 2;
const DOT: u16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselElements {
    pub slides: Vec<NodeId>,
    pub button_left: NodeId,
    pub button_right: NodeId,
    pub dot_container: NodeId,
}

impl CarouselElements {
    pub fn resolve(document: &Document, config: &CarouselConfig) -> Result<Self, SetupError> {
        Ok(Self {
            slides: error::require_all(document, &config.slide)?,
            button_left: error::require(document, &config.button_left)?,
            button_right: error::require(document, &config.button_right)?,
            dot_container: error::require(document, &config.dot_container)?,
        })
    }
}

#[derive(Debug)]
pub struct Carousel {
    elements: CarouselElements,
    dots: Vec<NodeId>,
    dot_selector: SelectorList,
    current: usize,
    autoplay: Option<TimerId>,
    config: CarouselConfig,
}

impl Carousel {
    pub fn attach(
        cx: &mut Context<'_>,
        elements: CarouselElements,
        config: &CarouselConfig,
    ) -> Result<Self, SetupError> {
        let dot_selector = error::class_selector(&config.dot_class)?;
        let dots = create_dots(cx.tree_mut(), &elements, config);

        cx.listen(elements.button_left, EventType::Click, PREV);
        cx.listen(elements.button_right, EventType::Click, NEXT);
        cx.listen(NodeId::ROOT, EventType::KeyDown, KEYDOWN);
        cx.listen(elements.dot_container, EventType::Click, DOT);

        let autoplay = (config.autoplay_ms > 0).then(|| cx.set_interval(config.autoplay_ms));

        let mut carousel = Self {
            elements,
            dots,
            dot_selector,
            current: 0,
            autoplay,
            config: config.clone(),
        };
        carousel.go_to(cx.tree_mut(), 0);
        tracing::debug!(slides = carousel.len(), autoplay_ms = config.autoplay_ms, "carousel attached");
        Ok(carousel)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.elements.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.slides.is_empty()
    }

    pub fn slides(&self) -> &[NodeId] {
        &self.elements.slides
    }

    /// Generated dot buttons, one per slide
    pub fn dots(&self) -> &[NodeId] {
        &self.dots
    }

    pub fn autoplay(&self) -> Option<TimerId> {
        self.autoplay
    }

    /// Show slide `index` and mark its dot
    pub fn go_to(&mut self, tree: &mut DomTree, index: usize) {
        if index >= self.len() {
            return;
        }
        self.current = index;

        for (i, &slide) in self.elements.slides.iter().enumerate() {
            let offset = 100 * (i as i64 - index as i64);
            if let Some(style) = tree.style_mut(slide) {
                style.set_property("transform", &format!("translateX({offset}%)"));
            }
        }
        for (i, &dot) in self.dots.iter().enumerate() {
            if let Some(classes) = tree.class_list_mut(dot) {
                classes.toggle(&self.config.dot_active_class, Some(i == index));
            }
        }
        tracing::debug!(slide = index, "slide moved");
    }

    pub fn next(&mut self, tree: &mut DomTree) {
        let index = (self.current + 1) % self.len();
        self.go_to(tree, index);
    }

    pub fn prev(&mut self, tree: &mut DomTree) {
        let index = self.current.checked_sub(1).unwrap_or(self.len() - 1);
        self.go_to(tree, index);
    }

    /// Slide index of a clicked dot
    fn dot_index(&self, tree: &DomTree, target: NodeId) -> Option<usize> {
        let dot = tree
            .closest_matching(target, &self.dot_selector)
            .filter(|&dot| tree.is_inclusive_descendant(dot, self.elements.dot_container))?;
        let dataset = tree.dataset(dot);
        let value = dataset.get(&self.config.slide_key)?;
        match value.parse() {
            Ok(index) => Some(index),
            Err(_) => {
                tracing::debug!(%dot, %value, "dot has no slide index");
                None
            }
        }
    }
}

/// Append `<button class="dots__dot" data-slide="i">` per slide
fn create_dots(tree: &mut DomTree, elements: &CarouselElements, config: &CarouselConfig) -> Vec<NodeId> {
    let slide_attribute = DOMStringMap::to_attribute_name(&config.slide_key);
    (0..elements.slides.len())
        .map(|i| {
            let dot = tree.create_element("button");
            tree.add_class(dot, &config.dot_class);
            tree.set_attribute(dot, &slide_attribute, &i.to_string());
            tree.append_child(elements.dot_container, dot);
            dot
        })
        .collect()
}

impl Behavior for Carousel {
    fn id(&self) -> UnitId {
        UnitId::Carousel
    }

    fn handle_event(&mut self, cx: &mut Context<'_>, slot: u16, event: &Event) {
        match slot {
            PREV => self.prev(cx.tree_mut()),
            NEXT => self.next(cx.tree_mut()),
            KEYDOWN => match event.key {
                Some(Key::ArrowLeft) => self.prev(cx.tree_mut()),
                Some(Key::ArrowRight) => self.next(cx.tree_mut()),
                _ => {}
            },
            DOT => {
                if let Some(index) = self.dot_index(cx.tree(), event.target) {
                    self.go_to(cx.tree_mut(), index);
                }
            }
            _ => {}
        }
    }

    fn handle_timer(&mut self, cx: &mut Context<'_>, timer: TimerId) {
        if Some(timer) == self.autoplay {
            self.next(cx.tree_mut());
        }
    }
}
