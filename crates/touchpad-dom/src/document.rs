//! Document - High-level document API
//!
//! Owns the tree, listener registry and viewport scroll behind interior
//! mutability so listeners can add/remove listeners and dispatch further
//! events while a dispatch is in progress. Share it through `Rc`.

use std::cell::{Cell, RefCell};

use crate::{DOMRect, DomError, DomTree, Event, EventListener, EventType, ListenerRegistry, NodeId, ShadowRootMode};

/// HTML Document
#[derive(Debug, Default)]
pub struct Document {
    tree: RefCell<DomTree>,
    listeners: RefCell<ListenerRegistry>,
    /// Viewport scroll offset
    scroll: Cell<(f64, f64)>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Document node ID
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    // --- Tree ---

    /// Create a detached element
    pub fn create_element(&self, tag: &str) -> NodeId {
        self.tree.borrow_mut().create_element(tag)
    }

    pub fn append_child(&self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.tree.borrow_mut().append_child(parent, child)
    }

    pub fn remove_child(&self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.tree.borrow_mut().remove_child(parent, child)
    }

    /// Attach a shadow root to `host`
    pub fn attach_shadow(&self, host: NodeId, mode: ShadowRootMode) -> Result<NodeId, DomError> {
        self.tree.borrow_mut().attach_shadow(host, mode)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.tree.borrow().parent(id)
    }

    pub fn shadow_root(&self, host: NodeId) -> Option<NodeId> {
        self.tree.borrow().shadow_root(host)
    }

    pub fn host(&self, shadow_root: NodeId) -> Option<NodeId> {
        self.tree.borrow().host(shadow_root)
    }

    pub fn is_connected(&self, id: NodeId) -> bool {
        self.tree.borrow().is_connected(id)
    }

    /// Tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<String> {
        let tree = self.tree.borrow();
        tree.get(id)?.as_element().map(|e| e.tag.clone())
    }

    // --- Geometry ---

    /// Set the border box of an element in page coordinates
    pub fn set_layout_rect(&self, id: NodeId, rect: DOMRect) -> Result<(), DomError> {
        let mut tree = self.tree.borrow_mut();
        let node = tree.get_mut(id).ok_or(DomError::NodeNotFound(id))?;
        let element = node.as_element_mut().ok_or(DomError::NotAnElement(id))?;
        element.layout = rect;
        Ok(())
    }

    /// Scroll the viewport to page offset `(x, y)`
    pub fn scroll_to(&self, x: f64, y: f64) {
        self.scroll.set((x, y));
    }

    /// Current viewport scroll offset
    pub fn scroll_offset(&self) -> (f64, f64) {
        self.scroll.get()
    }

    /// Border box in viewport (client) coordinates, measured now
    pub fn bounding_client_rect(&self, id: NodeId) -> Result<DOMRect, DomError> {
        let tree = self.tree.borrow();
        let node = tree.get(id).ok_or(DomError::NodeNotFound(id))?;
        let element = node.as_element().ok_or(DomError::NotAnElement(id))?;
        let (sx, sy) = self.scroll.get();
        Ok(element.layout.translate(-sx, -sy))
    }

    // --- Listeners ---

    /// Register `listener` on `node`; a handle already registered is ignored
    pub fn add_event_listener(&self, node: NodeId, event_type: EventType, listener: &EventListener) -> bool {
        let added = self.listeners.borrow_mut().add(node, event_type, listener);
        if added {
            tracing::trace!("addEventListener {} on {:?} ({:?})", event_type, node, listener.id());
        }
        added
    }

    /// Unregister `listener` from `node`; absent registrations are ignored
    pub fn remove_event_listener(&self, node: NodeId, event_type: EventType, listener: &EventListener) -> bool {
        let removed = self.listeners.borrow_mut().remove(node, event_type, listener.id());
        if removed {
            tracing::trace!("removeEventListener {} on {:?} ({:?})", event_type, node, listener.id());
        }
        removed
    }

    pub fn has_event_listener(&self, node: NodeId, event_type: EventType, listener: &EventListener) -> bool {
        self.listeners.borrow().contains(node, event_type, listener.id())
    }

    /// Number of listeners on a node for an event type
    pub fn listener_count(&self, node: NodeId, event_type: EventType) -> usize {
        self.listeners.borrow().count(node, event_type)
    }

    /// Total listener registrations in the document
    pub fn total_listeners(&self) -> usize {
        self.listeners.borrow().total()
    }

    // --- Dispatch ---

    /// Dispatch `event` at `target`.
    ///
    /// Listeners run synchronously along the event path: the target, its
    /// ancestors when the event bubbles, and the shadow host chain when it is
    /// composed. Returns `Ok(false)` if a listener cancelled the event. A
    /// listener error aborts the dispatch.
    pub fn dispatch_event(&self, target: NodeId, event: &mut Event) -> Result<bool, DomError> {
        let mut path = self.tree.borrow().event_path(target, event.composed)?;
        if !event.bubbles {
            path.truncate(1);
        }
        tracing::trace!("dispatch {} at {:?} ({} hops)", event.event_type, target, path.len());

        let result = self.run_path(&path, event);

        event.set_current_target(None);
        event.set_target(target);
        result?;
        Ok(!event.is_default_prevented())
    }

    fn run_path(&self, path: &[crate::tree::PathEntry], event: &mut Event) -> Result<(), DomError> {
        for entry in path {
            let listeners = self.listeners.borrow().snapshot(entry.node, event.event_type);
            event.set_target(entry.target);
            event.set_current_target(Some(entry.node));

            for listener in listeners {
                // Removed by an earlier listener in this dispatch
                if !self.has_event_listener(entry.node, event.event_type, &listener) {
                    continue;
                }
                listener.call(event)?;
            }

            if event.is_propagation_stopped() {
                break;
            }
        }
        Ok(())
    }
}
