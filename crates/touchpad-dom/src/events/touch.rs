//! Touch Events
//!
//! Touch event payload: active and changed touch lists.

use crate::NodeId;

/// Touch event payload
#[derive(Debug, Clone, Default)]
pub struct TouchEvent {
    /// All active touches
    pub touches: Vec<Touch>,
    /// Touches that changed
    pub changed_touches: Vec<Touch>,
}

/// Single touch point
#[derive(Debug, Clone, PartialEq)]
pub struct Touch {
    /// Unique identifier for this touch
    pub identifier: u32,
    /// Element the touch started on
    pub target: NodeId,
    /// X relative to viewport
    pub client_x: f64,
    /// Y relative to viewport
    pub client_y: f64,
    /// X relative to page
    pub page_x: f64,
    /// Y relative to page
    pub page_y: f64,
    /// X relative to screen
    pub screen_x: f64,
    /// Y relative to screen
    pub screen_y: f64,
}

impl Touch {
    /// Create a new touch point
    pub fn new(id: u32, target: NodeId, x: f64, y: f64) -> Self {
        Self {
            identifier: id,
            target,
            client_x: x,
            client_y: y,
            page_x: x,
            page_y: y,
            screen_x: x,
            screen_y: y,
        }
    }
}

impl TouchEvent {
    /// Event where `changed` touches changed while `touches` are down
    pub fn new(touches: Vec<Touch>, changed_touches: Vec<Touch>) -> Self {
        Self {
            touches,
            changed_touches,
        }
    }

    /// Event for a single touch that is both active and changed
    pub fn single(touch: Touch) -> Self {
        Self::new(vec![touch.clone()], vec![touch])
    }

    /// Changed touch with the given identifier
    pub fn changed(&self, identifier: u32) -> Option<&Touch> {
        self.changed_touches.iter().find(|t| t.identifier == identifier)
    }

    /// First changed touch
    pub fn first_changed(&self) -> Option<&Touch> {
        self.changed_touches.first()
    }
}
