//! Pointer Tracker
//!
//! Follows exactly one input stream at a time:
//!
//! - a primary-button mouse drag that starts on the source; move/up are
//!   heard on the document so the drag survives leaving the source
//! - a touch that starts on the source while idle; its identifier stays
//!   locked until that touch ends, whatever other fingers do
//!
//! Every accepted down/start/move yields one move notification, dispatched
//! synchronously on the emission target.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use touchpad_dom::{Document, Event, EventListener, NodeId, Touch};

use crate::input::{Subscription, TrackedEvent, ENTRY, MOUSE_DRAG, TOUCH_DRAG};
use crate::{TouchPadError, TouchPadMoveEvent, TrackerConfig};

/// Tracking state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingState {
    #[default]
    Idle,
    Active(ActiveInput),
}

/// Input stream being followed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveInput {
    Mouse,
    Touch { id: u32 },
}

/// Where a sample's position comes from
#[derive(Debug, Clone, PartialEq)]
enum Sample {
    Mouse,
    Touch(Touch),
}

/// Effects of one input on the tracker
#[derive(Debug, Default)]
struct Step {
    open: Option<Subscription>,
    close: Option<Subscription>,
    sample: Option<Sample>,
    /// Cancel the raw event's default action
    suppress_default: bool,
}

impl Step {
    fn ignore() -> Self {
        Self::default()
    }

    fn emit(sample: Sample) -> Self {
        Self {
            sample: Some(sample),
            ..Self::default()
        }
    }
}

impl TrackingState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// Identifier of the followed touch
    pub fn locked_touch(&self) -> Option<u32> {
        match self {
            Self::Active(ActiveInput::Touch { id }) => Some(*id),
            _ => None,
        }
    }

    fn advance(&mut self, input: &TrackedEvent<'_>) -> Step {
        use ActiveInput::{Mouse, Touch as TouchInput};
        use TrackedEvent as E;

        let mut step = match (*self, *input) {
            (Self::Idle, E::MouseDown(mouse)) if mouse.button.is_primary() => {
                *self = Self::Active(Mouse);
                Step {
                    open: Some(MOUSE_DRAG),
                    ..Step::emit(Sample::Mouse)
                }
            }
            (Self::Active(Mouse), E::MouseDown(mouse)) if mouse.button.is_primary() => {
                Step::emit(Sample::Mouse)
            }
            (Self::Active(Mouse), E::MouseMove(_)) => Step::emit(Sample::Mouse),
            (Self::Active(Mouse), E::MouseUp(_)) => {
                *self = Self::Idle;
                Step {
                    close: Some(MOUSE_DRAG),
                    ..Step::ignore()
                }
            }
            (Self::Idle, E::TouchStart(touch_event)) => match touch_event.first_changed() {
                Some(touch) => {
                    *self = Self::Active(TouchInput { id: touch.identifier });
                    Step {
                        open: Some(TOUCH_DRAG),
                        ..Step::emit(Sample::Touch(touch.clone()))
                    }
                }
                None => Step::ignore(),
            },
            (Self::Active(TouchInput { id }), E::TouchMove(touch_event)) => {
                match touch_event.changed(id) {
                    Some(touch) => Step::emit(Sample::Touch(touch.clone())),
                    None => Step::ignore(),
                }
            }
            (Self::Active(TouchInput { id }), E::TouchEnd(touch_event) | E::TouchCancel(touch_event))
                if touch_event.changed(id).is_some() =>
            {
                *self = Self::Idle;
                Step {
                    close: Some(TOUCH_DRAG),
                    ..Step::ignore()
                }
            }
            _ => Step::ignore(),
        };
        // Touch defaults are cancelled even for fingers that are not followed
        step.suppress_default =
            step.sample.is_some() || matches!(input, E::TouchStart(_) | E::TouchMove(_));
        step
    }
}

/// State reachable from the listener callback
#[derive(Debug)]
struct TrackerShared {
    document: Rc<Document>,
    source: NodeId,
    target: NodeId,
    event_name: &'static str,
    /// Single handle used for every registration and removal
    listener: EventListener,
    state: Cell<TrackingState>,
    open: RefCell<Vec<Subscription>>,
}

impl TrackerShared {
    fn scope_node(&self, subscription: &Subscription) -> NodeId {
        subscription.scope.node(self.source, self.document.root())
    }

    fn open(&self, subscription: Subscription) {
        let node = self.scope_node(&subscription);
        for &event_type in subscription.events {
            self.document.add_event_listener(node, event_type, &self.listener);
        }
        let mut open = self.open.borrow_mut();
        if !open.contains(&subscription) {
            open.push(subscription);
        }
        tracing::debug!(
            "touchpad {:?}: listening for {:?} on {:?}",
            self.source,
            subscription.events,
            node
        );
    }

    fn close(&self, subscription: Subscription) {
        let node = self.scope_node(&subscription);
        for &event_type in subscription.events {
            self.document.remove_event_listener(node, event_type, &self.listener);
        }
        self.open.borrow_mut().retain(|s| *s != subscription);
        tracing::debug!(
            "touchpad {:?}: stopped listening for {:?} on {:?}",
            self.source,
            subscription.events,
            node
        );
    }

    fn handle_event(&self, event: &mut Event) -> Result<(), TouchPadError> {
        let step = {
            let input = TrackedEvent::try_from(&*event)?;
            let mut state = self.state.get();
            let step = state.advance(&input);
            if state != self.state.get() {
                tracing::debug!(
                    "touchpad {:?}: {:?} -> {:?} on {}",
                    self.source,
                    self.state.get(),
                    state,
                    event.event_type
                );
            }
            self.state.set(state);
            step
        };

        if let Some(subscription) = step.close {
            self.close(subscription);
        }
        if let Some(subscription) = step.open {
            self.open(subscription);
        }
        if step.suppress_default {
            event.prevent_default();
        }
        if let Some(sample) = step.sample {
            self.emit(event, sample)?;
        }
        Ok(())
    }

    fn emit(&self, original: &Event, sample: Sample) -> Result<(), TouchPadError> {
        // Measured per sample so layout and scroll changes mid-drag are honoured
        let rect = self.document.bounding_client_rect(self.source)?;
        let touch = match &sample {
            Sample::Touch(touch) => Some(touch),
            Sample::Mouse => None,
        };
        let notification = TouchPadMoveEvent::new(original, self.source, &rect, touch)?;
        tracing::trace!(
            "touchpad {:?}: sample ({}, {}) from {}",
            self.source,
            notification.detail.x,
            notification.detail.y,
            original.event_type
        );

        let mut event = notification.into_event(self.event_name);
        self.document.dispatch_event(self.target, &mut event)?;
        Ok(())
    }

    fn detach(&self) {
        let root = self.document.root();
        for node in [self.source, root] {
            for event_type in TrackedEvent::EVENT_TYPES {
                self.document.remove_event_listener(node, event_type, &self.listener);
            }
        }
        self.open.borrow_mut().clear();
        self.state.set(TrackingState::Idle);
    }
}

/// Pointer tracker bound to one source element
///
/// Dropping the tracker detaches it.
#[derive(Debug)]
pub struct PointerTracker {
    shared: Rc<TrackerShared>,
}

impl PointerTracker {
    /// Tracker dispatching on the source itself
    pub fn new(document: Rc<Document>, source: NodeId) -> Self {
        Self::with_config(document, source, TrackerConfig::default())
    }

    /// Tracker with explicit configuration
    pub fn with_config(document: Rc<Document>, source: NodeId, config: TrackerConfig) -> Self {
        let target = config.emission_target.unwrap_or(source);
        let shared = Rc::new_cyclic(|weak: &Weak<TrackerShared>| {
            let weak = weak.clone();
            let listener = EventListener::new(move |event| {
                let Some(shared) = weak.upgrade() else {
                    return Ok(());
                };
                shared.handle_event(event).map_err(|err| {
                    tracing::error!("touchpad {:?}: {}", shared.source, err);
                    anyhow::Error::from(err)
                })
            });
            TrackerShared {
                document,
                source,
                target,
                event_name: config.event_name,
                listener,
                state: Cell::new(TrackingState::Idle),
                open: RefCell::new(Vec::new()),
            }
        });
        Self { shared }
    }

    /// Start listening for mouse-down and touch-start on the source
    pub fn attach(&self) {
        tracing::debug!("touchpad {:?}: attach", self.shared.source);
        self.shared.open(ENTRY);
    }

    /// Remove every listener this tracker may have installed and return to idle.
    ///
    /// Safe to call any number of times, attached or not.
    pub fn detach(&self) {
        tracing::debug!("touchpad {:?}: detach", self.shared.source);
        self.shared.detach();
    }

    pub fn state(&self) -> TrackingState {
        self.shared.state.get()
    }

    /// Whether entry listeners are installed
    pub fn is_attached(&self) -> bool {
        self.shared.open.borrow().contains(&ENTRY)
    }

    /// Subscriptions currently open
    pub fn open_subscriptions(&self) -> Vec<Subscription> {
        self.shared.open.borrow().clone()
    }

    /// Element positions are measured against
    pub fn source(&self) -> NodeId {
        self.shared.source
    }

    /// Node notifications are dispatched on
    pub fn target(&self) -> NodeId {
        self.shared.target
    }

    pub fn document(&self) -> &Rc<Document> {
        &self.shared.document
    }
}

impl Drop for PointerTracker {
    fn drop(&mut self) {
        self.shared.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use touchpad_dom::{MouseButton, MouseEvent, TouchEvent};

    fn touch(id: u32) -> Touch {
        Touch::new(id, NodeId::ROOT, 0.0, 0.0)
    }

    fn run(state: &mut TrackingState, event: &Event) -> Step {
        state.advance(&TrackedEvent::try_from(event).unwrap())
    }

    #[test]
    fn test_primary_down_activates_mouse() {
        let mut state = TrackingState::Idle;
        let step = run(&mut state, &Event::mouse_down(MouseButton::Primary, 0.0, 0.0));

        assert_eq!(state, TrackingState::Active(ActiveInput::Mouse));
        assert_eq!(step.open, Some(MOUSE_DRAG));
        assert_eq!(step.sample, Some(Sample::Mouse));
    }

    #[test]
    fn test_secondary_down_is_ignored() {
        for button in [MouseButton::Secondary, MouseButton::Auxiliary] {
            let mut state = TrackingState::Idle;
            let step = run(&mut state, &Event::mouse_down(button, 0.0, 0.0));

            assert_eq!(state, TrackingState::Idle);
            assert!(step.open.is_none());
            assert!(step.sample.is_none());
        }
    }

    #[test]
    fn test_mouse_up_returns_to_idle() {
        let mut state = TrackingState::Active(ActiveInput::Mouse);
        let step = run(&mut state, &Event::mouse_up(MouseButton::Primary, 0.0, 0.0));

        assert_eq!(state, TrackingState::Idle);
        assert_eq!(step.close, Some(MOUSE_DRAG));
        assert!(step.sample.is_none());
    }

    #[test]
    fn test_idle_ignores_moves() {
        let mut state = TrackingState::Idle;
        assert!(run(&mut state, &Event::mouse_move(1.0, 1.0)).sample.is_none());
        assert!(run(&mut state, &Event::touch_move(TouchEvent::single(touch(1)))).sample.is_none());
        assert_eq!(state, TrackingState::Idle);
    }

    #[test]
    fn test_touch_start_locks_first_changed() {
        let mut state = TrackingState::Idle;
        let event = Event::touch_start(TouchEvent::new(vec![touch(4), touch(9)], vec![touch(4), touch(9)]));
        let step = run(&mut state, &event);

        assert_eq!(state.locked_touch(), Some(4));
        assert_eq!(step.open, Some(TOUCH_DRAG));
        assert_eq!(step.sample, Some(Sample::Touch(touch(4))));
    }

    #[test]
    fn test_touch_start_without_changed_touches_is_ignored() {
        let mut state = TrackingState::Idle;
        let step = run(&mut state, &Event::touch_start(TouchEvent::default()));
        assert_eq!(state, TrackingState::Idle);
        assert!(step.open.is_none());
    }

    #[test]
    fn test_second_touch_start_keeps_lock() {
        let mut state = TrackingState::Active(ActiveInput::Touch { id: 1 });
        let step = run(&mut state, &Event::touch_start(TouchEvent::single(touch(2))));

        assert_eq!(state.locked_touch(), Some(1));
        assert!(step.sample.is_none());
        assert!(step.suppress_default);
    }

    #[test]
    fn test_touch_defaults_suppressed_without_sample() {
        let mut state = TrackingState::Active(ActiveInput::Touch { id: 1 });
        let step = run(&mut state, &Event::touch_move(TouchEvent::single(touch(2))));
        assert!(step.sample.is_none());
        assert!(step.suppress_default);

        let step = run(&mut state, &Event::touch_end(TouchEvent::single(touch(2))));
        assert!(!step.suppress_default);

        let mut state = TrackingState::Idle;
        let step = run(&mut state, &Event::mouse_down(MouseButton::Secondary, 0.0, 0.0));
        assert!(!step.suppress_default);
    }

    #[test]
    fn test_other_touch_end_keeps_lock() {
        let mut state = TrackingState::Active(ActiveInput::Touch { id: 1 });
        let step = run(&mut state, &Event::touch_end(TouchEvent::single(touch(2))));

        assert_eq!(state.locked_touch(), Some(1));
        assert!(step.close.is_none());
    }

    #[test]
    fn test_touch_cancel_of_locked_touch_unlocks() {
        let mut state = TrackingState::Active(ActiveInput::Touch { id: 1 });
        let step = run(&mut state, &Event::touch_cancel(TouchEvent::single(touch(1))));

        assert_eq!(state, TrackingState::Idle);
        assert_eq!(step.close, Some(TOUCH_DRAG));
    }

    #[test]
    fn test_mouse_and_touch_do_not_mix() {
        let mut state = TrackingState::Active(ActiveInput::Touch { id: 1 });
        let step = run(&mut state, &Event::mouse_down(MouseButton::Primary, 0.0, 0.0));
        assert!(step.sample.is_none());
        assert_eq!(state.locked_touch(), Some(1));

        let mut state = TrackingState::Active(ActiveInput::Mouse);
        let step = run(&mut state, &Event::touch_start(TouchEvent::single(touch(1))));
        assert!(step.sample.is_none());
        assert_eq!(state, TrackingState::Active(ActiveInput::Mouse));
    }

    #[test]
    fn test_mouse_move_sample_uses_event_position() {
        let mut state = TrackingState::Active(ActiveInput::Mouse);
        let event = Event::mouse(touchpad_dom::EventType::MouseMove, MouseEvent::at(5.0, 6.0));
        assert_eq!(run(&mut state, &event).sample, Some(Sample::Mouse));
    }
}
