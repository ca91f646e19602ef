//! Touchpad DOM - Host Document Model
//!
//! Arena DOM tree with shadow roots, element geometry, listener
//! registration and bubbling/composed event dispatch.

mod node;
mod tree;
mod shadow;
mod geometry;
mod listeners;
mod document;
pub mod events;

pub use node::{Node, NodeData, ElementData};
pub use tree::DomTree;
pub use shadow::{ShadowRoot, ShadowRootMode};
pub use geometry::DOMRect;
pub use listeners::{EventListener, HandlerId, ListenerRegistry};
pub use document::Document;
pub use events::{
    CustomEvent, Event, EventInit, EventPayload, EventType, MouseButton, MouseEvent, Touch,
    TouchEvent,
};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Document node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Null link
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this is not the null link
    #[inline]
    pub fn is_valid(&self) -> bool {
        *self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}

/// DOM errors
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeId),

    #[error("Node is not an element: {0:?}")]
    NotAnElement(NodeId),

    #[error("Shadow root already attached to {0:?}")]
    ShadowRootExists(NodeId),

    #[error("Hierarchy request error: {0}")]
    HierarchyRequest(String),

    #[error(transparent)]
    Listener(#[from] anyhow::Error),
}
