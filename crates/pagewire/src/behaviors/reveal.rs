//! Reveal sections on scroll
//!
//! Every section is hidden up front and observed on its own. Visibility is
//! symmetric: a section that scrolls back out of view is hidden again.

use pagewire_dom::{Document, NodeId};

use super::{Behavior, Context};
use crate::config::RevealConfig;
use crate::error::{self, SetupError};
use crate::surface::{IntersectionObserverEntry, IntersectionObserverOptions, ObserverId, UnitId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealElements {
    pub sections: Vec<NodeId>,
}

impl RevealElements {
    pub fn resolve(document: &Document, config: &RevealConfig) -> Result<Self, SetupError> {
        Ok(Self {
            sections: error::find_all(document, &config.section)?,
        })
    }
}

#[derive(Debug)]
pub struct Reveal {
    sections: Vec<NodeId>,
    hidden_class: String,
    observer: ObserverId,
}

impl Reveal {
    pub fn attach(cx: &mut Context<'_>, elements: RevealElements, config: &RevealConfig) -> Self {
        let observer = cx.create_observer(IntersectionObserverOptions::with_threshold(config.threshold));
        for &section in &elements.sections {
            cx.observe(observer, section);
            cx.tree_mut().add_class(section, &config.hidden_class);
        }
        tracing::debug!(sections = elements.sections.len(), "section reveal attached");

        Self {
            sections: elements.sections,
            hidden_class: config.hidden_class.clone(),
            observer,
        }
    }

    pub fn sections(&self) -> &[NodeId] {
        &self.sections
    }
}

impl Behavior for Reveal {
    fn id(&self) -> UnitId {
        UnitId::Reveal
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
        let tree = cx.tree_mut();
        for entry in entries {
            if let Some(classes) = tree.class_list_mut(entry.target) {
                classes.toggle(&self.hidden_class, Some(!entry.is_intersecting));
            }
        }
    }
}
