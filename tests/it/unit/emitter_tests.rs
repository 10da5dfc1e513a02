//! Unit tests for the publish/subscribe channel.

use canvas_input::{BusState, Emitter, EventName, InputEvent, PointerEvent, RawEvent};
use parking_lot::Mutex;
use std::sync::Arc;

fn drag_event() -> InputEvent {
    InputEvent::Drag {
        event: RawEvent::pointer_move(PointerEvent::at(5.0, 5.0)),
        state: BusState::default(),
    }
}

#[test]
fn test_handlers_only_see_their_name() {
    let emitter = Emitter::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let s = Arc::clone(&seen);
    emitter.on(EventName::Drag, move |e| s.lock().push(e.name()));
    let s = Arc::clone(&seen);
    emitter.on(EventName::Pointermove, move |e| s.lock().push(e.name()));

    emitter.emit(&drag_event());
    assert_eq!(*seen.lock(), vec![EventName::Drag]);
}

#[test]
fn test_subscribe_during_emit_does_not_deadlock() {
    let emitter = Arc::new(Emitter::new());
    let e = Arc::clone(&emitter);
    emitter.once(EventName::Drag, move |_| {
        e.on(EventName::Drag, |_| {});
    });

    assert!(emitter.emit(&drag_event()));
    // The once handler is gone, the one it added stays
    assert_eq!(emitter.listener_count(EventName::Drag), 1);
}

#[test]
fn test_subscription_ids_are_unique() {
    let emitter = Emitter::new();
    let a = emitter.on(EventName::Keyup, |_| {});
    let b = emitter.on(EventName::Keyup, |_| {});
    assert_ne!(a, b);
}
