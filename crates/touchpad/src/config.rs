//! Tracker Configuration

use touchpad_dom::NodeId;

use crate::TOUCHPAD_MOVE;

/// Pointer tracker configuration options
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Node move notifications are dispatched on; `None` means the source
    pub emission_target: Option<NodeId>,

    /// Event type name of move notifications
    pub event_name: &'static str,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            emission_target: None,
            event_name: TOUCHPAD_MOVE,
        }
    }
}

impl TrackerConfig {
    /// Dispatch notifications on `target` instead of the source
    pub fn with_emission_target(mut self, target: NodeId) -> Self {
        self.emission_target = Some(target);
        self
    }

    pub fn with_event_name(mut self, name: &'static str) -> Self {
        self.event_name = name;
        self
    }
}
