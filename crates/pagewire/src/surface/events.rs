//! DOM events and listener registry
//!
//! Listeners are `HandlerId`s rather than closures: the page routes a fired
//! handler back to the unit that owns it, which keeps every unit's state
//! behind plain `&mut` access.

use std::collections::HashMap;

use pagewire_dom::{DomTree, NodeId};

use super::{HandlerId, Key};

/// Event type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    KeyDown,
    MouseOver,
    MouseOut,
    Load,
}

impl EventType {
    /// Check if this event type bubbles to ancestors
    pub fn bubbles(&self) -> bool {
        !matches!(self, EventType::Load)
    }
}

/// A dispatched event
#[derive(Debug, Clone)]
pub struct Event {
    pub event_type: EventType,
    /// Node the event was fired at
    pub target: NodeId,
    /// Node whose listeners are currently running
    pub current_target: NodeId,
    /// Key for keyboard events
    pub key: Option<Key>,
    /// Virtual clock time in milliseconds
    pub timestamp: f64,
}

impl Event {
    pub fn new(event_type: EventType, target: NodeId) -> Self {
        Self {
            event_type,
            target,
            current_target: target,
            key: None,
            timestamp: 0.0,
        }
    }

    pub fn click(target: NodeId) -> Self {
        Self::new(EventType::Click, target)
    }

    pub fn key_down(target: NodeId, key: Key) -> Self {
        Self {
            key: Some(key),
            ..Self::new(EventType::KeyDown, target)
        }
    }

    pub fn mouse_over(target: NodeId) -> Self {
        Self::new(EventType::MouseOver, target)
    }

    pub fn mouse_out(target: NodeId) -> Self {
        Self::new(EventType::MouseOut, target)
    }

    pub fn load(target: NodeId) -> Self {
        Self::new(EventType::Load, target)
    }
}

/// Listener options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// Remove the listener after its first invocation
    pub once: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Listener {
    handler: HandlerId,
    once: bool,
}

/// Listeners by (target, event type), in registration order
#[derive(Debug, Default)]
pub struct EventRegistry {
    listeners: HashMap<(NodeId, EventType), Vec<Listener>>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener; a handler already registered on the same target and
    /// type is not added twice.
    pub fn add_listener(
        &mut self,
        target: NodeId,
        event_type: EventType,
        handler: HandlerId,
        options: ListenerOptions,
    ) -> bool {
        let list = self.listeners.entry((target, event_type)).or_default();
        if list.iter().any(|l| l.handler == handler) {
            return false;
        }
        list.push(Listener { handler, once: options.once });
        true
    }

    /// Handlers registered on a target, in registration order
    pub fn handlers(&self, target: NodeId, event_type: EventType) -> Vec<HandlerId> {
        self.listeners
            .get(&(target, event_type))
            .map(|list| list.iter().map(|l| l.handler).collect())
            .unwrap_or_default()
    }

    /// Snapshot the handlers to run on `target` and drop the `once` ones.
    ///
    /// Listeners added while these run only see later events.
    pub fn take_for_dispatch(&mut self, target: NodeId, event_type: EventType) -> Vec<HandlerId> {
        let Some(list) = self.listeners.get_mut(&(target, event_type)) else {
            return Vec::new();
        };
        let handlers = list.iter().map(|l| l.handler).collect();
        list.retain(|l| !l.once);
        if list.is_empty() {
            self.listeners.remove(&(target, event_type));
        }
        handlers
    }

    /// Nodes an event visits: the target, then ancestors up to the document
    /// for bubbling types.
    pub fn propagation_path(tree: &DomTree, event: &Event) -> Vec<NodeId> {
        if event.event_type.bubbles() {
            tree.ancestors(event.target).collect()
        } else {
            vec![event.target]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::UnitId;

    fn handler(slot: u16) -> HandlerId {
        HandlerId::new(UnitId::Modal, slot)
    }

    #[test]
    fn test_add_dedup() {
        let mut registry = EventRegistry::new();
        let node = NodeId::ROOT;
        assert!(registry.add_listener(node, EventType::Click, handler(0), ListenerOptions::default()));
        assert!(!registry.add_listener(node, EventType::Click, handler(0), ListenerOptions::default()));
        assert!(registry.add_listener(node, EventType::KeyDown, handler(0), ListenerOptions::default()));
        assert_eq!(registry.handlers(node, EventType::Click), vec![handler(0)]);
        assert_eq!(registry.handlers(node, EventType::KeyDown), vec![handler(0)]);
    }

    #[test]
    fn test_once_listener_dropped_after_dispatch() {
        let mut registry = EventRegistry::new();
        let once = ListenerOptions { once: true };
        registry.add_listener(NodeId::ROOT, EventType::Load, handler(2), once);
        registry.add_listener(NodeId::ROOT, EventType::Load, handler(3), ListenerOptions::default());

        assert_eq!(registry.take_for_dispatch(NodeId::ROOT, EventType::Load), vec![handler(2), handler(3)]);
        assert_eq!(registry.take_for_dispatch(NodeId::ROOT, EventType::Load), vec![handler(3)]);
    }

    #[test]
    fn test_propagation_path() {
        let mut tree = DomTree::new();
        let nav = tree.create_element("nav");
        let link = tree.create_element("a");
        tree.append_child(tree.root(), nav);
        tree.append_child(nav, link);

        let path = EventRegistry::propagation_path(&tree, &Event::mouse_over(link));
        assert_eq!(path, vec![link, nav, NodeId::ROOT]);

        let path = EventRegistry::propagation_path(&tree, &Event::load(link));
        assert_eq!(path, vec![link]);
    }
}
