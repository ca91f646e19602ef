//! Drag demo
//!
//! Run with `RUST_LOG=touchpad=trace` to see tracker transitions.

use std::rc::Rc;

use touchpad::{PointerTracker, TouchPadMoveEvent, TOUCHPAD_MOVE};
use touchpad_dom::{DOMRect, Document, Event, EventListener, EventType, MouseButton, Touch, TouchEvent};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let doc = Rc::new(Document::new());
    let pad = doc.create_element("div");
    doc.append_child(doc.root(), pad)?;
    doc.set_layout_rect(pad, DOMRect::from_xywh(20.0, 20.0, 100.0, 100.0))?;

    let tracker = PointerTracker::new(Rc::clone(&doc), pad);
    tracker.attach();

    let printer = EventListener::new(|event| {
        if let Some(sample) = TouchPadMoveEvent::from_event(event) {
            println!(
                "{:>10} -> x = {:+.2}, y = {:+.2}",
                sample.original.event_type, sample.detail.x, sample.detail.y
            );
        }
        Ok(())
    });
    doc.add_event_listener(pad, EventType::Custom(TOUCHPAD_MOVE), &printer);

    println!("mouse drag leaving the pad:");
    let root = doc.root();
    let mouse = [
        (pad, Event::mouse_down(MouseButton::Primary, 20.0, 20.0)),
        (root, Event::mouse_move(30.0, 30.0)),
        (root, Event::mouse_move(0.0, 0.0)),
        (root, Event::mouse_up(MouseButton::Primary, 0.0, 0.0)),
        (root, Event::mouse_move(10.0, 10.0)),
    ];
    for (target, mut event) in mouse {
        doc.dispatch_event(target, &mut event)?;
    }

    println!("two-finger touch, first finger followed:");
    let touch = |id, x, y| Touch::new(id, pad, x, y);
    let touches = [
        Event::touch_start(TouchEvent::new(
            vec![touch(1, 20.0, 20.0), touch(2, 60.0, 60.0)],
            vec![touch(1, 20.0, 20.0), touch(2, 60.0, 60.0)],
        )),
        Event::touch_move(TouchEvent::single(touch(2, 70.0, 70.0))),
        Event::touch_move(TouchEvent::single(touch(1, 45.0, 95.0))),
        Event::touch_end(TouchEvent::single(touch(1, 45.0, 95.0))),
    ];
    for mut event in touches {
        doc.dispatch_event(pad, &mut event)?;
    }

    tracker.detach();
    Ok(())
}
