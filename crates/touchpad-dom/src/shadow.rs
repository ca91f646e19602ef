//! Shadow DOM
//!
//! A shadow root has no parent. Composed events leave it through its host;
//! everything else stops at the boundary.

use crate::NodeId;

/// Shadow root mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowRootMode {
    #[default]
    Open,
    Closed,
}

/// Shadow root data
#[derive(Debug, Clone)]
pub struct ShadowRoot {
    /// Host element
    pub host: NodeId,
    /// Mode (open/closed)
    pub mode: ShadowRootMode,
}

impl ShadowRoot {
    /// Create a new shadow root
    pub fn new(host: NodeId, mode: ShadowRootMode) -> Self {
        Self { host, mode }
    }

    /// Whether the host exposes this root through `shadowRoot`
    pub fn is_open(&self) -> bool {
        self.mode == ShadowRootMode::Open
    }
}
