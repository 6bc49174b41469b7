//! Menu fade animation
//!
//! mouseover/mouseout bubble, so both are caught once on the nav. Only
//! events whose literal target is a link do anything: the logo and every
//! link take the dim opacity, then the hovered link is set back to 1. On
//! mouseout the same handler runs with opacity 1.

use pagewire_dom::{Document, DomTree, NodeId, SelectorList};

use super::{Behavior, Context, opacity_value};
use crate::config::NavConfig;
use crate::error::{self, SetupError};
use crate::surface::{Event, EventType, UnitId};

const OVER: u16 = 0;
const OUT: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavElements {
    pub nav: NodeId,
    pub logo: NodeId,
}

impl NavElements {
    pub fn resolve(document: &Document, config: &NavConfig) -> Result<Self, SetupError> {
        let nav = error::require(document, &config.nav)?;
        let logo = document
            .tree()
            .query_selector_matching(nav, &error::selector(&config.logo)?)
            .ok_or_else(|| SetupError::MissingElement { selector: config.logo.clone() })?;
        Ok(Self { nav, logo })
    }
}

#[derive(Debug)]
pub struct NavFade {
    elements: NavElements,
    links: SelectorList,
    link_class: String,
    dim_opacity: f64,
}

impl NavFade {
    pub fn attach(cx: &mut Context<'_>, elements: NavElements, config: &NavConfig) -> Result<Self, SetupError> {
        let fade = Self {
            links: error::class_selector(&config.link_class)?,
            link_class: config.link_class.clone(),
            dim_opacity: config.dim_opacity,
            elements,
        };
        cx.listen(fade.elements.nav, EventType::MouseOver, OVER);
        cx.listen(fade.elements.nav, EventType::MouseOut, OUT);
        Ok(fade)
    }

    fn hover(&self, tree: &mut DomTree, link: NodeId, opacity: f64) {
        if !tree.has_class(link, &self.link_class) {
            return;
        }
        let value = opacity_value(opacity);

        if let Some(style) = tree.style_mut(self.elements.logo) {
            style.set_property("opacity", &value);
        }
        for sibling in tree.query_selector_all_matching(self.elements.nav, &self.links) {
            if let Some(style) = tree.style_mut(sibling) {
                style.set_property("opacity", &value);
            }
        }
        if let Some(style) = tree.style_mut(link) {
            style.set_property("opacity", "1");
        }
    }
}

impl Behavior for NavFade {
    fn id(&self) -> UnitId {
        UnitId::NavFade
    }

    fn handle_event(&mut self, cx: &mut Context<'_>, slot: u16, event: &Event) {
        let opacity = match slot {
            OVER => self.dim_opacity,
            OUT => 1.0,
            _ => return,
        };
        self.hover(cx.tree_mut(), event.target, opacity);
    }
}
