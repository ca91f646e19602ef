//! DOM Node
//!
//! Nodes link to each other by `NodeId` instead of pointers, so the whole
//! tree lives in one arena and listener closures never hold node borrows.

use crate::{DOMRect, NodeId, ShadowRoot};

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if root or shadow root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a shadow root node for `host`
    pub fn shadow_root(root: ShadowRoot) -> Self {
        Self::with_data(NodeData::ShadowRoot(root))
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get shadow root data if this is a shadow root
    #[inline]
    pub fn as_shadow_root(&self) -> Option<&ShadowRoot> {
        match &self.data {
            NodeData::ShadowRoot(root) => Some(root),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Shadow root attached to an element
    ShadowRoot(ShadowRoot),
}

/// Element data
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Lowercased tag name
    pub tag: String,
    /// Attached shadow root, if any
    pub shadow_root: Option<NodeId>,
    /// Border box in page coordinates
    pub layout: DOMRect,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            shadow_root: None,
            layout: DOMRect::default(),
        }
    }
}
