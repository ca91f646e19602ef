//! Touchpad
//!
//! Turns a mouse drag or a single-finger touch drag that starts on a source
//! element into a stream of `touchpadmove` events whose detail is the pointer
//! position relative to the element's current bounding rect.
//!
//! Mouse drags keep reporting after the pointer leaves the element, so
//! samples outside `[0, 1]` are normal.

mod config;
mod element;
mod input;
mod move_event;
mod tracker;
mod transform;

pub use config::TrackerConfig;
pub use element::TouchPadElement;
pub use input::{ListeningScope, Subscription, TrackedEvent, ENTRY, MOUSE_DRAG, TOUCH_DRAG};
pub use move_event::{TouchPadMoveEvent, TOUCHPAD_MOVE};
pub use tracker::{ActiveInput, PointerTracker, TrackingState};
pub use transform::{relative, ClientPosition, RelativePosition};

use touchpad_dom::{DomError, EventType};

/// Touchpad errors
#[derive(Debug, thiserror::Error)]
pub enum TouchPadError {
    #[error("Unhandled event type: {0}")]
    UnhandledEventType(EventType),

    #[error("Expected MouseEvent or TouchEvent for {0}")]
    InvalidEventShape(EventType),

    #[error(transparent)]
    Dom(#[from] DomError),
}
