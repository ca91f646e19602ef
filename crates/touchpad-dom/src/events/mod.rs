//! Input Events Module
//!
//! Event envelope shared by mouse, touch and custom events.

mod mouse;
mod touch;
mod custom;

pub use mouse::{MouseButton, MouseEvent};
pub use touch::{Touch, TouchEvent};
pub use custom::CustomEvent;

use std::any::Any;
use std::fmt;

use crate::NodeId;

/// Event type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    MouseDown,
    MouseUp,
    MouseMove,
    MouseEnter,
    MouseLeave,
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
    Custom(&'static str),
}

impl EventType {
    /// DOM event type name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::MouseDown => "mousedown",
            Self::MouseUp => "mouseup",
            Self::MouseMove => "mousemove",
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
            Self::TouchStart => "touchstart",
            Self::TouchMove => "touchmove",
            Self::TouchEnd => "touchend",
            Self::TouchCancel => "touchcancel",
            Self::Custom(name) => *name,
        }
    }

    /// Whether user-agent events of this type bubble
    pub fn bubbles(&self) -> bool {
        !matches!(self, Self::MouseEnter | Self::MouseLeave)
    }

    /// Check if this is a mouse event type
    pub fn is_mouse(&self) -> bool {
        matches!(
            self,
            Self::Click
                | Self::MouseDown
                | Self::MouseUp
                | Self::MouseMove
                | Self::MouseEnter
                | Self::MouseLeave
        )
    }

    /// Check if this is a touch event type
    pub fn is_touch(&self) -> bool {
        matches!(
            self,
            Self::TouchStart | Self::TouchMove | Self::TouchEnd | Self::TouchCancel
        )
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Event construction flags
#[derive(Debug, Clone, Copy, Default)]
pub struct EventInit {
    pub bubbles: bool,
    pub cancelable: bool,
    pub composed: bool,
}

/// Event-specific data
#[derive(Debug, Clone)]
pub enum EventPayload {
    Mouse(MouseEvent),
    Touch(TouchEvent),
    Custom(CustomEvent),
}

/// Event
#[derive(Debug, Clone)]
pub struct Event {
    pub event_type: EventType,
    pub payload: EventPayload,
    pub bubbles: bool,
    pub cancelable: bool,
    /// Crosses shadow boundaries
    pub composed: bool,
    pub timestamp: f64,
    target: NodeId,
    current_target: Option<NodeId>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl Event {
    /// Create an event with explicit flags
    pub fn new(event_type: EventType, payload: EventPayload, init: EventInit) -> Self {
        Self {
            event_type,
            payload,
            bubbles: init.bubbles,
            cancelable: init.cancelable,
            composed: init.composed,
            timestamp: 0.0,
            target: NodeId::NONE,
            current_target: None,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// User-agent flags: bubbling (where the type bubbles), cancelable, composed
    fn ui_init(event_type: EventType) -> EventInit {
        EventInit {
            bubbles: event_type.bubbles(),
            cancelable: true,
            composed: true,
        }
    }

    /// Create a user-agent mouse event
    pub fn mouse(event_type: EventType, mouse: MouseEvent) -> Self {
        Self::new(event_type, EventPayload::Mouse(mouse), Self::ui_init(event_type))
    }

    /// Create a user-agent touch event
    pub fn touch(event_type: EventType, touch: TouchEvent) -> Self {
        Self::new(event_type, EventPayload::Touch(touch), Self::ui_init(event_type))
    }

    /// Create a custom event carrying `detail`
    pub fn custom<T: Any>(name: &'static str, detail: T, init: EventInit) -> Self {
        Self::new(
            EventType::Custom(name),
            EventPayload::Custom(CustomEvent::new(detail)),
            init,
        )
    }

    /// Create a mouse down event
    pub fn mouse_down(button: MouseButton, x: f64, y: f64) -> Self {
        Self::mouse(EventType::MouseDown, MouseEvent::pressed(button, x, y))
    }

    /// Create a mouse move event
    pub fn mouse_move(x: f64, y: f64) -> Self {
        Self::mouse(EventType::MouseMove, MouseEvent::at(x, y))
    }

    /// Create a mouse up event
    pub fn mouse_up(button: MouseButton, x: f64, y: f64) -> Self {
        Self::mouse(EventType::MouseUp, MouseEvent::at(x, y).with_button(button))
    }

    /// Create a touch start event
    pub fn touch_start(touch: TouchEvent) -> Self {
        Self::touch(EventType::TouchStart, touch)
    }

    /// Create a touch move event
    pub fn touch_move(touch: TouchEvent) -> Self {
        Self::touch(EventType::TouchMove, touch)
    }

    /// Create a touch end event
    pub fn touch_end(touch: TouchEvent) -> Self {
        Self::touch(EventType::TouchEnd, touch)
    }

    /// Create a touch cancel event
    pub fn touch_cancel(touch: TouchEvent) -> Self {
        Self::touch(EventType::TouchCancel, touch)
    }

    /// Target as seen by the listener currently running
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Node whose listeners are currently running
    pub fn current_target(&self) -> Option<NodeId> {
        self.current_target
    }

    pub(crate) fn set_target(&mut self, target: NodeId) {
        self.target = target;
    }

    pub(crate) fn set_current_target(&mut self, node: Option<NodeId>) {
        self.current_target = node;
    }

    /// Mouse payload
    pub fn as_mouse(&self) -> Option<&MouseEvent> {
        match &self.payload {
            EventPayload::Mouse(mouse) => Some(mouse),
            _ => None,
        }
    }

    /// Touch payload
    pub fn as_touch(&self) -> Option<&TouchEvent> {
        match &self.payload {
            EventPayload::Touch(touch) => Some(touch),
            _ => None,
        }
    }

    /// Custom event detail of type `T`
    pub fn detail<T: Any>(&self) -> Option<&T> {
        match &self.payload {
            EventPayload::Custom(custom) => custom.detail(),
            _ => None,
        }
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Stop propagation after the current node
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Check if propagation was stopped
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
