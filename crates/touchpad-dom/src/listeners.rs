//! Event Listeners
//!
//! Listener handles and the per-node registry. A handle is registered and
//! removed by identity: the same `EventListener` (or a clone of it) always
//! refers to the same registration.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{Event, EventType, NodeId};

static NEXT_HANDLER_ID: AtomicU64 = AtomicU64::new(1);

/// Event handler function ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(pub u64);

impl HandlerId {
    fn next() -> Self {
        Self(NEXT_HANDLER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

type Callback = dyn Fn(&mut Event) -> anyhow::Result<()>;

/// Owned listener handle
#[derive(Clone)]
pub struct EventListener {
    id: HandlerId,
    callback: Rc<Callback>,
}

impl EventListener {
    /// Wrap a callback in a new handle with a fresh ID
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&mut Event) -> anyhow::Result<()> + 'static,
    {
        Self {
            id: HandlerId::next(),
            callback: Rc::new(callback),
        }
    }

    pub fn id(&self) -> HandlerId {
        self.id
    }

    /// Invoke the callback
    pub fn call(&self, event: &mut Event) -> anyhow::Result<()> {
        (self.callback)(event)
    }
}

impl fmt::Debug for EventListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventListener").field("id", &self.id).finish_non_exhaustive()
    }
}

/// Listeners by node and event type
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    handlers: HashMap<(NodeId, EventType), Vec<EventListener>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener; returns false if the handle is already registered
    pub fn add(&mut self, node: NodeId, event_type: EventType, listener: &EventListener) -> bool {
        let listeners = self.handlers.entry((node, event_type)).or_default();
        if listeners.iter().any(|l| l.id == listener.id) {
            return false;
        }
        listeners.push(listener.clone());
        true
    }

    /// Remove a listener; returns false if it was not registered
    pub fn remove(&mut self, node: NodeId, event_type: EventType, id: HandlerId) -> bool {
        let key = (node, event_type);
        let Some(listeners) = self.handlers.get_mut(&key) else {
            return false;
        };
        let initial_len = listeners.len();
        listeners.retain(|l| l.id != id);
        let removed = listeners.len() < initial_len;
        if listeners.is_empty() {
            self.handlers.remove(&key);
        }
        removed
    }

    /// Check whether a handle is registered
    pub fn contains(&self, node: NodeId, event_type: EventType, id: HandlerId) -> bool {
        self.handlers
            .get(&(node, event_type))
            .is_some_and(|listeners| listeners.iter().any(|l| l.id == id))
    }

    /// Clone the listener list so callbacks can run without holding the registry
    pub fn snapshot(&self, node: NodeId, event_type: EventType) -> Vec<EventListener> {
        self.handlers.get(&(node, event_type)).cloned().unwrap_or_default()
    }

    /// Number of listeners on a node for an event type
    pub fn count(&self, node: NodeId, event_type: EventType) -> usize {
        self.handlers.get(&(node, event_type)).map_or(0, Vec::len)
    }

    /// Total registrations
    pub fn total(&self) -> usize {
        self.handlers.values().map(Vec::len).sum()
    }
}
