//! Modal window
//!
//! Any open button shows the modal and its overlay together; the close
//! button, a click on the overlay, or Escape (only while open) hide both.

use pagewire_dom::{Document, DomTree, NodeId};

use super::{Behavior, Context};
use crate::config::ModalConfig;
use crate::error::{self, SetupError};
use crate::surface::{Event, EventType, Key, UnitId};

const OPEN: u16 = 0;
const CLOSE: u16 = 1;
const KEYDOWN: u16 = 2;

/// Resolved modal elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalElements {
    pub modal: NodeId,
    pub overlay: NodeId,
    pub close_button: NodeId,
    /// May be empty: the modal then only ever closes
    pub open_buttons: Vec<NodeId>,
}

impl ModalElements {
    pub fn resolve(document: &Document, config: &ModalConfig) -> Result<Self, SetupError> {
        Ok(Self {
            modal: error::require(document, &config.modal)?,
            overlay: error::require(document, &config.overlay)?,
            close_button: error::require(document, &config.close_button)?,
            open_buttons: error::find_all(document, &config.open_buttons)?,
        })
    }
}

#[derive(Debug)]
pub struct Modal {
    elements: ModalElements,
    hidden_class: String,
}

impl Modal {
    pub fn attach(cx: &mut Context<'_>, elements: ModalElements, config: &ModalConfig) -> Self {
        for &button in &elements.open_buttons {
            cx.listen(button, EventType::Click, OPEN);
        }
        cx.listen(elements.close_button, EventType::Click, CLOSE);
        cx.listen(elements.overlay, EventType::Click, CLOSE);
        cx.listen(NodeId::ROOT, EventType::KeyDown, KEYDOWN);

        tracing::debug!(open_buttons = elements.open_buttons.len(), "modal attached");
        Self {
            elements,
            hidden_class: config.hidden_class.clone(),
        }
    }

    pub fn elements(&self) -> &ModalElements {
        &self.elements
    }

    /// Open means the modal lacks the hidden marker
    pub fn is_open(&self, tree: &DomTree) -> bool {
        !tree.has_class(self.elements.modal, &self.hidden_class)
    }

    fn open(&self, tree: &mut DomTree) {
        tree.remove_class(self.elements.modal, &self.hidden_class);
        tree.remove_class(self.elements.overlay, &self.hidden_class);
        tracing::debug!("modal opened");
    }

    fn close(&self, tree: &mut DomTree) {
        tree.add_class(self.elements.modal, &self.hidden_class);
        tree.add_class(self.elements.overlay, &self.hidden_class);
        tracing::debug!("modal closed");
    }
}

impl Behavior for Modal {
    fn id(&self) -> UnitId {
        UnitId::Modal
    }

    fn handle_event(&mut self, cx: &mut Context<'_>, slot: u16, event: &Event) {
        match slot {
            OPEN => self.open(cx.tree_mut()),
            CLOSE => self.close(cx.tree_mut()),
            KEYDOWN if event.key == Some(Key::Escape) && self.is_open(cx.tree()) => {
                self.close(cx.tree_mut());
            }
            _ => {}
        }
    }
}
