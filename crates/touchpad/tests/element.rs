//! `<touch-pad>` element tests

use std::cell::RefCell;
use std::rc::Rc;

use touchpad::{RelativePosition, TouchPadElement, TouchPadMoveEvent, TOUCHPAD_MOVE};
use touchpad_dom::{DOMRect, Document, Event, EventListener, EventType, MouseButton, NodeId};

type Seen = Rc<RefCell<Vec<(RelativePosition, NodeId)>>>;

/// document > container > touch-pad (0, 0, 100x100) > canvas
fn mount() -> (Rc<Document>, NodeId, TouchPadElement, NodeId) {
    let doc = Rc::new(Document::new());
    let container = doc.create_element("div");
    doc.append_child(doc.root(), container).unwrap();

    let pad = TouchPadElement::create(Rc::clone(&doc));
    doc.append_child(container, pad.host()).unwrap();
    doc.set_layout_rect(pad.host(), DOMRect::from_xywh(0.0, 0.0, 100.0, 100.0)).unwrap();

    let canvas = doc.create_element("canvas");
    doc.append_child(pad.host(), canvas).unwrap();
    doc.set_layout_rect(canvas, DOMRect::from_xywh(0.0, 0.0, 100.0, 100.0)).unwrap();
    (doc, container, pad, canvas)
}

fn observe(doc: &Document, node: NodeId) -> Seen {
    let seen: Seen = Rc::default();
    let sink = Rc::clone(&seen);
    let listener = EventListener::new(move |event| {
        if let Some(sample) = TouchPadMoveEvent::from_event(event) {
            sink.borrow_mut().push((sample.detail, event.target()));
        }
        Ok(())
    });
    doc.add_event_listener(node, EventType::Custom(TOUCHPAD_MOVE), &listener);
    seen
}

fn drag(doc: &Document, on: NodeId) {
    let mut down = Event::mouse_down(MouseButton::Primary, 10.0, 10.0);
    doc.dispatch_event(on, &mut down).unwrap();
    let mut moved = Event::mouse_move(20.0, 20.0);
    doc.dispatch_event(on, &mut moved).unwrap();
    let mut up = Event::mouse_up(MouseButton::Primary, 20.0, 20.0);
    doc.dispatch_event(on, &mut up).unwrap();
}

#[test]
fn test_emits_on_host_when_connected() {
    let (doc, _, mut pad, canvas) = mount();
    pad.connected_callback();
    let seen = observe(&doc, pad.host());

    drag(&doc, canvas);

    let host = pad.host();
    assert_eq!(
        *seen.borrow(),
        vec![
            (RelativePosition::new(0.1, 0.1), host),
            (RelativePosition::new(0.2, 0.2), host),
        ]
    );
}

#[test]
fn test_notifications_bubble_past_host() {
    let (doc, container, mut pad, canvas) = mount();
    pad.connected_callback();
    let seen = observe(&doc, container);

    drag(&doc, canvas);

    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn test_stops_when_removed() {
    let (doc, container, mut pad, canvas) = mount();
    pad.connected_callback();
    let seen = observe(&doc, pad.host());

    doc.remove_child(container, pad.host()).unwrap();
    assert!(!doc.is_connected(pad.host()));
    pad.disconnected_callback();

    drag(&doc, canvas);

    assert!(seen.borrow().is_empty());
}

#[test]
fn test_not_tracking_before_connected() {
    let (doc, _, pad, canvas) = mount();
    let seen = observe(&doc, pad.host());

    drag(&doc, canvas);

    assert!(seen.borrow().is_empty());
    assert!(pad.tracker().is_none());
}

#[test]
fn test_upgrade_existing_element() {
    let doc = Rc::new(Document::new());
    let host = doc.create_element(TouchPadElement::TAG_NAME);
    doc.append_child(doc.root(), host).unwrap();
    doc.set_layout_rect(host, DOMRect::from_xywh(0.0, 0.0, 50.0, 50.0)).unwrap();

    let mut pad = TouchPadElement::upgrade(Rc::clone(&doc), host).unwrap();
    pad.connected_callback();
    let seen = observe(&doc, host);

    let mut down = Event::mouse_down(MouseButton::Primary, 25.0, 5.0);
    doc.dispatch_event(host, &mut down).unwrap();

    assert_eq!(seen.borrow()[0].0, RelativePosition::new(0.5, 0.1));
}
