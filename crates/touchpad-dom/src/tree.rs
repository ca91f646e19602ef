//! DOM Tree (arena-based allocation)

use crate::{DomError, Node, NodeData, NodeId, ShadowRoot, ShadowRootMode};

/// One hop of an event path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PathEntry {
    /// Node whose listeners run
    pub node: NodeId,
    /// Target as seen from `node` (retargeted across shadow boundaries)
    pub target: NodeId,
}

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self { nodes: vec![Node::document()] }
    }

    /// Document node ID
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: NodeId) -> Result<&Node, DomError> {
        self.get(id).ok_or(DomError::NodeNotFound(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, DomError> {
        self.get_mut(id).ok_or(DomError::NodeNotFound(id))
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Append `child` as the last child of `parent`, moving it if already attached
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.node(parent)?;
        let child_node = self.node(child)?;
        if !child_node.is_element() {
            return Err(DomError::HierarchyRequest(format!(
                "{:?} cannot be inserted as a child",
                child
            )));
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest(format!(
                "{:?} is an ancestor of {:?}",
                child, parent
            )));
        }

        let old_parent = child_node.parent;
        if old_parent.is_valid() {
            self.unlink(old_parent, child)?;
        }

        let last = self.node(parent)?.last_child;
        {
            let node = self.node_mut(child)?;
            node.parent = parent;
            node.prev_sibling = last;
            node.next_sibling = NodeId::NONE;
        }
        if last.is_valid() {
            self.node_mut(last)?.next_sibling = child;
        } else {
            self.node_mut(parent)?.first_child = child;
        }
        self.node_mut(parent)?.last_child = child;
        Ok(())
    }

    /// Remove `child` from `parent`
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.node(parent)?;
        if self.node(child)?.parent != parent {
            return Err(DomError::HierarchyRequest(format!(
                "{:?} is not a child of {:?}",
                child, parent
            )));
        }
        self.unlink(parent, child)
    }

    fn unlink(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        let (prev, next) = {
            let node = self.node(child)?;
            (node.prev_sibling, node.next_sibling)
        };
        if prev.is_valid() {
            self.node_mut(prev)?.next_sibling = next;
        } else {
            self.node_mut(parent)?.first_child = next;
        }
        if next.is_valid() {
            self.node_mut(next)?.prev_sibling = prev;
        } else {
            self.node_mut(parent)?.last_child = prev;
        }
        let node = self.node_mut(child)?;
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
        Ok(())
    }

    /// Attach a shadow root to `host`
    pub fn attach_shadow(&mut self, host: NodeId, mode: ShadowRootMode) -> Result<NodeId, DomError> {
        match self.node(host)?.as_element() {
            None => return Err(DomError::NotAnElement(host)),
            Some(element) if element.shadow_root.is_some() => {
                return Err(DomError::ShadowRootExists(host));
            }
            Some(_) => {}
        }
        let root = self.push(Node::shadow_root(ShadowRoot::new(host, mode)));
        if let Some(element) = self.node_mut(host)?.as_element_mut() {
            element.shadow_root = Some(root);
        }
        Ok(root)
    }

    /// Parent in the light tree
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(NodeId::is_valid)
    }

    /// Shadow root attached to `host`
    pub fn shadow_root(&self, host: NodeId) -> Option<NodeId> {
        self.get(host)?.as_element()?.shadow_root
    }

    /// Host of a shadow root
    pub fn host(&self, shadow_root: NodeId) -> Option<NodeId> {
        self.get(shadow_root)?.as_shadow_root().map(|root| root.host)
    }

    /// Parent, or the host when `id` is a shadow root
    pub fn composed_parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent(id).or_else(|| self.host(id))
    }

    /// Children of a node in order
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        while current.is_valid() {
            out.push(current);
            current = self.get(current).map(|n| n.next_sibling).unwrap_or(NodeId::NONE);
        }
        out
    }

    /// Whether `ancestor` is `node` or one of its composed ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.composed_parent(id);
        }
        false
    }

    /// Whether the node is reachable from the document through hosts and parents
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.get(id).is_some() && self.is_inclusive_ancestor(NodeId::ROOT, id)
    }

    /// Nodes an event at `target` visits, target first
    pub(crate) fn event_path(&self, target: NodeId, composed: bool) -> Result<Vec<PathEntry>, DomError> {
        self.node(target)?;
        let mut path = Vec::new();
        let mut seen_target = target;
        let mut current = target;
        loop {
            path.push(PathEntry { node: current, target: seen_target });
            let node = self.node(current)?;
            if node.parent.is_valid() {
                current = node.parent;
                continue;
            }
            match &node.data {
                NodeData::ShadowRoot(root) if composed => {
                    seen_target = root.host;
                    current = root.host;
                }
                _ => break,
            }
        }
        Ok(path)
    }
}
