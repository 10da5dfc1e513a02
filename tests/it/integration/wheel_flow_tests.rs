//! Wheel events through a live bus.

use crate::helpers::{pinch, wheel_tick, TestHost};
use canvas_input::{Direction, EventName, InputEvent, WheelEvent};

#[test]
fn test_wheel_is_always_captured() {
    let host = TestHost::new();
    let raw = host.wheel(WheelEvent::default());

    assert!(raw.default_prevented());
    assert!(raw.propagation_stopped());
    assert_eq!(host.recorder.count(EventName::Mousewheel), 1);
}

#[test]
fn test_wheel_direction_table() {
    let cases = [
        (wheel_tick(120.0), Some(Direction::Up)),
        (wheel_tick(-120.0), Some(Direction::Down)),
        (pinch(10.0, 0.0), Some(Direction::Left)),
        (pinch(0.0, -5.0), Some(Direction::Down)),
        (WheelEvent::default(), None),
    ];

    for (wheel, expected) in cases {
        let host = TestHost::new();
        host.wheel(wheel);
        assert_eq!(
            host.recorder.last().and_then(|e| e.direction()),
            expected,
            "wheel {wheel:?}"
        );
    }
}

#[test]
fn test_wheel_carries_current_state() {
    let host = TestHost::new();
    host.press(10.0, 10.0);
    host.move_to(15.0, 10.0);
    host.wheel(wheel_tick(120.0));

    match host.recorder.last() {
        Some(InputEvent::Mousewheel { dir, state, .. }) => {
            assert_eq!(dir, Some(Direction::Up));
            assert!(state.primary_button_down);
            assert_eq!(state.move_offset.x, 5.0);
        }
        other => panic!("expected mousewheel, got {other:?}"),
    }
}

#[test]
fn test_wheel_does_not_touch_gesture_state() {
    let host = TestHost::new();
    let before = host.bus.state();
    host.wheel(pinch(3.0, 3.0));
    assert_eq!(host.bus.state(), before);
}
