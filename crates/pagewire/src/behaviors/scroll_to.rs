//! Smooth-scroll button
//!
//! The button names its destination in an attribute; the selector is read
//! on every click, not cached.

use pagewire_dom::{Document, NodeId};

use super::{Behavior, Context};
use crate::config::ScrollToConfig;
use crate::error::{self, SetupError};
use crate::surface::{Event, EventType, ScrollBehavior, UnitId};

const CLICK: u16 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollToElements {
    pub button: NodeId,
}

impl ScrollToElements {
    pub fn resolve(document: &Document, config: &ScrollToConfig) -> Result<Self, SetupError> {
        let button = error::require(document, &config.button)?;
        if !document.tree().has_attribute(button, &config.target_attribute) {
            return Err(SetupError::MissingAttribute {
                selector: config.button.clone(),
                attribute: config.target_attribute.clone(),
            });
        }
        Ok(Self { button })
    }
}

#[derive(Debug)]
pub struct ScrollTo {
    button: NodeId,
    target_attribute: String,
}

impl ScrollTo {
    pub fn attach(cx: &mut Context<'_>, elements: ScrollToElements, config: &ScrollToConfig) -> Self {
        cx.listen(elements.button, EventType::Click, CLICK);
        Self {
            button: elements.button,
            target_attribute: config.target_attribute.clone(),
        }
    }

    /// Element the button currently points at
    fn resolve_target(&self, document: &Document) -> Option<NodeId> {
        let selector = document.tree().attribute(self.button, &self.target_attribute)?;
        match document.query_selector(&selector) {
            Ok(target) => target,
            Err(err) => {
                tracing::debug!(%err, "scroll target selector rejected");
                None
            }
        }
    }
}

impl Behavior for ScrollTo {
    fn id(&self) -> UnitId {
        UnitId::ScrollTo
    }

    fn handle_event(&mut self, cx: &mut Context<'_>, slot: u16, _event: &Event) {
        if slot != CLICK {
            return;
        }
        match self.resolve_target(cx.document) {
            Some(target) => {
                tracing::debug!(%target, "smooth scroll requested");
                cx.scroll_into_view(target, ScrollBehavior::Smooth);
            }
            None => tracing::debug!("scroll button has no resolvable target"),
        }
    }
}
