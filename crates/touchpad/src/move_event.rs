//! TouchPadMoveEvent
//!
//! The notification emitted for every sample: relative position, the source
//! element the position is measured against, and the raw input event.

use touchpad_dom::{DOMRect, Event, EventInit, EventPayload, NodeId, Touch};

use crate::{relative, RelativePosition, TouchPadError};

/// Default notification event type name
pub const TOUCHPAD_MOVE: &str = "touchpadmove";

/// Move notification detail
#[derive(Debug, Clone)]
pub struct TouchPadMoveEvent {
    /// Pointer position relative to the source element
    pub detail: RelativePosition,
    /// Element the position is measured against
    pub source: NodeId,
    /// Raw mouse or touch event that produced the sample
    pub original: Event,
}

impl TouchPadMoveEvent {
    /// Build a sample from `touch` if given, else from the mouse payload of `original`.
    ///
    /// Fails with `InvalidEventShape` when neither is available.
    pub fn new(
        original: &Event,
        source: NodeId,
        rect: &DOMRect,
        touch: Option<&Touch>,
    ) -> Result<Self, TouchPadError> {
        let detail = match (touch, &original.payload) {
            (Some(touch), _) => relative(touch, rect),
            (None, EventPayload::Mouse(mouse)) => relative(mouse, rect),
            (None, _) => return Err(TouchPadError::InvalidEventShape(original.event_type)),
        };
        Ok(Self {
            detail,
            source,
            original: original.clone(),
        })
    }

    /// Wrap into a bubbling, composed custom event named `name`
    pub fn into_event(self, name: &'static str) -> Event {
        Event::custom(
            name,
            self,
            EventInit {
                bubbles: true,
                cancelable: false,
                composed: true,
            },
        )
    }

    /// Recover the notification from a dispatched event
    pub fn from_event(event: &Event) -> Option<&Self> {
        event.detail::<Self>()
    }
}
