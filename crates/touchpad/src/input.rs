//! Tracked input alphabet
//!
//! The tracker only ever subscribes to the event types below. Conversion
//! from a raw `Event` happens here, so the state machine never sees an
//! unknown type.

use touchpad_dom::{Event, EventPayload, EventType, MouseEvent, NodeId, TouchEvent};

use crate::TouchPadError;

/// An event the tracker handles, borrowed from the raw event
#[derive(Debug, Clone, Copy)]
pub enum TrackedEvent<'a> {
    MouseDown(&'a MouseEvent),
    MouseMove(&'a MouseEvent),
    MouseUp(&'a MouseEvent),
    TouchStart(&'a TouchEvent),
    TouchMove(&'a TouchEvent),
    TouchEnd(&'a TouchEvent),
    TouchCancel(&'a TouchEvent),
}

impl TrackedEvent<'_> {
    /// Every event type the tracker may register for
    pub const EVENT_TYPES: [EventType; 7] = [
        EventType::MouseDown,
        EventType::MouseMove,
        EventType::MouseUp,
        EventType::TouchStart,
        EventType::TouchMove,
        EventType::TouchEnd,
        EventType::TouchCancel,
    ];

    pub fn event_type(&self) -> EventType {
        match self {
            Self::MouseDown(_) => EventType::MouseDown,
            Self::MouseMove(_) => EventType::MouseMove,
            Self::MouseUp(_) => EventType::MouseUp,
            Self::TouchStart(_) => EventType::TouchStart,
            Self::TouchMove(_) => EventType::TouchMove,
            Self::TouchEnd(_) => EventType::TouchEnd,
            Self::TouchCancel(_) => EventType::TouchCancel,
        }
    }
}

impl<'a> TryFrom<&'a Event> for TrackedEvent<'a> {
    type Error = TouchPadError;

    fn try_from(event: &'a Event) -> Result<Self, Self::Error> {
        use EventType as T;

        match (event.event_type, &event.payload) {
            (T::MouseDown, EventPayload::Mouse(m)) => Ok(Self::MouseDown(m)),
            (T::MouseMove, EventPayload::Mouse(m)) => Ok(Self::MouseMove(m)),
            (T::MouseUp, EventPayload::Mouse(m)) => Ok(Self::MouseUp(m)),
            (T::TouchStart, EventPayload::Touch(t)) => Ok(Self::TouchStart(t)),
            (T::TouchMove, EventPayload::Touch(t)) => Ok(Self::TouchMove(t)),
            (T::TouchEnd, EventPayload::Touch(t)) => Ok(Self::TouchEnd(t)),
            (T::TouchCancel, EventPayload::Touch(t)) => Ok(Self::TouchCancel(t)),
            (
                other @ (T::MouseDown
                | T::MouseMove
                | T::MouseUp
                | T::TouchStart
                | T::TouchMove
                | T::TouchEnd
                | T::TouchCancel),
                _,
            ) => Err(TouchPadError::InvalidEventShape(other)),
            (other, _) => Err(TouchPadError::UnhandledEventType(other)),
        }
    }
}

/// Where a subscription's listeners live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListeningScope {
    /// The source element
    Source,
    /// The owning document
    Root,
}

impl ListeningScope {
    /// Node the scope resolves to
    pub fn node(&self, source: NodeId, root: NodeId) -> NodeId {
        match self {
            Self::Source => source,
            Self::Root => root,
        }
    }
}

/// A group of listeners opened and closed together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    pub scope: ListeningScope,
    pub events: &'static [EventType],
}

/// Entry events on the source, open while attached
pub const ENTRY: Subscription = Subscription {
    scope: ListeningScope::Source,
    events: &[EventType::MouseDown, EventType::TouchStart],
};

/// Mouse continuation, escalated to the document so drags survive leaving the source
pub const MOUSE_DRAG: Subscription = Subscription {
    scope: ListeningScope::Root,
    events: &[EventType::MouseMove, EventType::MouseUp],
};

/// Touch continuation; touch events keep targeting the element the touch began on
pub const TOUCH_DRAG: Subscription = Subscription {
    scope: ListeningScope::Source,
    events: &[EventType::TouchMove, EventType::TouchEnd, EventType::TouchCancel],
};

#[cfg(test)]
mod tests {
    use super::*;
    use touchpad_dom::{EventInit, MouseButton};

    #[test]
    fn test_mouse_events_convert() {
        let event = Event::mouse_down(MouseButton::Primary, 1.0, 2.0);
        let tracked = TrackedEvent::try_from(&event).unwrap();
        assert!(matches!(tracked, TrackedEvent::MouseDown(m) if m.client_y == 2.0));
        assert_eq!(tracked.event_type(), EventType::MouseDown);
    }

    #[test]
    fn test_touch_cancel_converts() {
        let event = Event::touch_cancel(TouchEvent::default());
        assert!(matches!(TrackedEvent::try_from(&event), Ok(TrackedEvent::TouchCancel(_))));
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let event = Event::mouse(EventType::MouseLeave, MouseEvent::at(0.0, 0.0));
        assert!(matches!(
            TrackedEvent::try_from(&event),
            Err(TouchPadError::UnhandledEventType(EventType::MouseLeave))
        ));

        let event = Event::custom("touchpadmove", (), EventInit::default());
        assert!(matches!(
            TrackedEvent::try_from(&event),
            Err(TouchPadError::UnhandledEventType(EventType::Custom("touchpadmove")))
        ));
    }

    #[test]
    fn test_mismatched_payload_is_rejected() {
        let event = Event::touch(EventType::MouseMove, TouchEvent::default());
        assert!(matches!(
            TrackedEvent::try_from(&event),
            Err(TouchPadError::InvalidEventShape(EventType::MouseMove))
        ));
    }

    #[test]
    fn test_subscriptions_cover_alphabet() {
        let mut covered: Vec<EventType> = [ENTRY, MOUSE_DRAG, TOUCH_DRAG]
            .iter()
            .flat_map(|sub| sub.events.iter().copied())
            .collect();
        covered.sort_by_key(|t| t.name());
        let mut expected = TrackedEvent::EVENT_TYPES.to_vec();
        expected.sort_by_key(|t| t.name());
        assert_eq!(covered, expected);
    }

    #[test]
    fn test_scope_node() {
        let source = touchpad_dom::Document::new().create_element("div");
        assert_eq!(ListeningScope::Source.node(source, NodeId::ROOT), source);
        assert_eq!(ListeningScope::Root.node(source, NodeId::ROOT), NodeId::ROOT);
    }
}
