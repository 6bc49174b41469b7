//! Tabbed component
//!
//! One delegated click listener on the tab strip. A click resolves to the
//! nearest enclosing tab, so a click on the number label inside a tab still
//! counts; a click on bare strip is ignored. Tabs and panes pair up by the
//! identifier in the tab's data attribute, not by position.

use pagewire_dom::{Document, DomTree, NodeId, SelectorList};

use super::{Behavior, Context};
use crate::config::TabsConfig;
use crate::error::{self, SetupError};
use crate::surface::{Event, EventType, UnitId};

const CLICK: u16 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabElements {
    pub container: NodeId,
}

impl TabElements {
    pub fn resolve(document: &Document, config: &TabsConfig) -> Result<Self, SetupError> {
        Ok(Self {
            container: error::require(document, &config.container)?,
        })
    }
}

#[derive(Debug)]
pub struct Tabs {
    container: NodeId,
    tab: SelectorList,
    tab_active: SelectorList,
    content_active: SelectorList,
    config: TabsConfig,
}

impl Tabs {
    pub fn attach(cx: &mut Context<'_>, elements: TabElements, config: &TabsConfig) -> Result<Self, SetupError> {
        let tabs = Self {
            container: elements.container,
            tab: error::selector(&config.tab)?,
            tab_active: error::class_selector(&config.tab_active_class)?,
            content_active: error::class_selector(&config.content_active_class)?,
            config: config.clone(),
        };
        cx.listen(elements.container, EventType::Click, CLICK);
        tracing::debug!(active = ?tabs.active_tab(cx.tree()), "tabs attached");
        Ok(tabs)
    }

    /// Identifier of the tab carrying the active marker
    pub fn active_tab(&self, tree: &DomTree) -> Option<String> {
        let tab = tree.query_selector_matching(self.container, &self.tab_active)?;
        tree.dataset(tab).get(&self.config.id_key).map(str::to_owned)
    }

    /// Make tab `id` and its pane the single active pair.
    ///
    /// Leaves everything untouched when either counterpart is missing.
    pub fn activate(&self, tree: &mut DomTree, id: &str) -> bool {
        let (Ok(tab), Ok(content)) = (
            error::class_selector(&format!("{}{id}", self.config.tab_prefix)),
            error::class_selector(&format!("{}{id}", self.config.content_prefix)),
        ) else {
            tracing::debug!(id, "tab id does not form a class name");
            return false;
        };
        let root = tree.root();
        let (Some(tab), Some(content)) = (
            tree.query_selector_matching(root, &tab),
            tree.query_selector_matching(root, &content),
        ) else {
            tracing::debug!(id, "tab or content pane missing");
            return false;
        };

        for old in tree.query_selector_all_matching(root, &self.tab_active) {
            tree.remove_class(old, &self.config.tab_active_class);
        }
        for old in tree.query_selector_all_matching(root, &self.content_active) {
            tree.remove_class(old, &self.config.content_active_class);
        }
        tree.add_class(tab, &self.config.tab_active_class);
        tree.add_class(content, &self.config.content_active_class);

        tracing::debug!(id, "tab switched");
        true
    }
}

impl Behavior for Tabs {
    fn id(&self) -> UnitId {
        UnitId::Tabs
    }

    fn handle_event(&mut self, cx: &mut Context<'_>, slot: u16, event: &Event) {
        if slot != CLICK {
            return;
        }
        let tree = cx.tree();
        let Some(tab) = tree
            .closest_matching(event.target, &self.tab)
            .filter(|&tab| tree.is_inclusive_descendant(tab, self.container))
        else {
            return;
        };
        let Some(id) = tree.dataset(tab).get(&self.config.id_key).map(str::to_owned) else {
            return;
        };
        self.activate(cx.tree_mut(), &id);
    }
}
