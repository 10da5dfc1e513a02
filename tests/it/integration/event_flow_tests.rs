//! Drawing-surface and window events that do not depend on gesture state.

use crate::helpers::TestHost;
use canvas_input::{
    BusSettings, BusState, EventName, InputEvent, InputEventBus, InputSources, ListenerTable,
    Point, PointerEvent, RawEvent,
};
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

#[test]
fn test_vector_click_emits_draw_click() {
    let host = TestHost::new();
    host.click_vector(5.0, 6.0);

    assert_eq!(host.recorder.names(), vec!["draw_click"]);
    assert_eq!(host.recorder.last().map(|e| e.raw().position()), Some(Point::new(5.0, 6.0)));
}

#[test]
fn test_vector_press_double_fires() {
    let host = TestHost::new();
    host.press_vector(20.0, 30.0);

    // Vector-layer bindings first, then the bubbled element press
    assert_eq!(
        host.recorder.names(),
        vec!["draw_mousedown", "svg_mousedown", "pointerdown"]
    );
    assert!(host.bus.state().primary_button_down);
}

#[test]
fn test_context_menu_suppressed_exactly_once() {
    let host = TestHost::new();
    let raw = host.context_menu(1.0, 1.0);

    assert!(raw.default_prevented());
    assert_eq!(host.recorder.count(EventName::Contextmenu), 1);
    assert_eq!(host.recorder.events().len(), 1);
    match host.recorder.last() {
        Some(InputEvent::Contextmenu { event }) => assert!(event.default_prevented()),
        other => panic!("expected contextmenu, got {other:?}"),
    }
}

#[test]
fn test_context_menu_does_not_change_gesture_state() {
    let host = TestHost::new();
    host.context_menu(9.0, 9.0);
    assert!(!host.bus.state().primary_button_down);
}

#[test]
fn test_window_keyup() {
    let host = TestHost::new();
    let raw = host.key_up("a");

    assert!(!raw.default_prevented());
    match host.recorder.last() {
        Some(InputEvent::Keyup { event }) => {
            assert_eq!(event.kind(), canvas_input::EventKind::KeyUp);
        }
        other => panic!("expected keyup, got {other:?}"),
    }
}

#[test]
fn test_unsubscribed_consumer_stops_receiving() {
    let host = TestHost::new();
    let hits = Arc::new(AtomicUsize::new(0));
    let h = hits.clone();
    let id = host.bus.on(EventName::Keyup, move |_| {
        h.fetch_add(1, Ordering::SeqCst);
    });

    host.key_up("a");
    assert!(host.bus.off(EventName::Keyup, id));
    host.key_up("b");
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_consumer_emit_reaches_subscribers() {
    let host = TestHost::new();
    let event = InputEvent::Keyup {
        event: RawEvent::key_up(crate::helpers::key_event("z")),
    };
    assert!(host.bus.emit(&event));
    assert_eq!(host.recorder.last(), Some(event));
}

#[test]
fn test_subscriber_can_call_back_into_bus() {
    let element = Arc::new(ListenerTable::new());
    let sources = InputSources {
        window: Arc::new(ListenerTable::new()),
        element: element.clone(),
        vector: Arc::new(ListenerTable::new()),
    };
    let bus = Arc::new(InputEventBus::new(sources, BusSettings::default()));
    bus.attach().unwrap();

    let seen: Arc<Mutex<Option<(BusState, BusState)>>> = Arc::new(Mutex::new(None));
    let (s, weak) = (seen.clone(), Arc::downgrade(&bus));
    bus.on(EventName::Pointerdown, move |event| {
        // No bus lock is held while subscribers run
        if let (Some(bus), Some(payload)) = (weak.upgrade(), event.state()) {
            *s.lock() = Some((*payload, bus.state()));
        }
    });

    let mut raw = RawEvent::pointer_down(PointerEvent::at(4.0, 4.0));
    element.dispatch(&mut raw);

    let (payload, live) = seen.lock().take().expect("pointerdown delivered");
    assert_eq!(payload, live);
    assert!(live.primary_button_down);
}

#[test]
fn test_dispatch_stats_recorded_per_handler() {
    let host = TestHost::new();
    host.move_to(1.0, 1.0);
    host.move_to(2.0, 2.0);
    host.key_up("a");

    assert_eq!(host.bus.dispatch_stats("pointer_move").map(|s| s.count()), Some(2));
    assert_eq!(host.bus.dispatch_stats("key_up").map(|s| s.count()), Some(1));
    assert!(host.bus.dispatch_stats("wheel").is_none());
    host.bus.log_dispatch_summary();
}

#[test]
fn test_dispatch_time_includes_subscribers() {
    let host = TestHost::new();
    host.bus.on(EventName::Keyup, |_| thread::sleep(Duration::from_millis(6)));
    host.key_up("a");

    let stats = host.bus.dispatch_stats("key_up").expect("key_up timed");
    assert!(stats.max_ms() >= 5.0, "max_ms = {}", stats.max_ms());
}

/// `io::Write` sink shared with a `fmt` subscriber.
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl CapturedLog {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

fn captured_run(settings: BusSettings, run: impl FnOnce(&TestHost)) -> String {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let host = TestHost::detached(settings);
        host.bus.attach().unwrap();
        run(&host);
    });
    log.text()
}

#[test]
fn test_trace_events_logs_each_publish() {
    let settings = BusSettings {
        trace_events: true,
        ..Default::default()
    };
    let output = captured_run(settings, |host| {
        host.key_up("a");
        host.context_menu(1.0, 1.0);
    });

    assert_eq!(output.matches("Publishing input event").count(), 2);
    assert!(output.contains("event_name=keyup"));
    assert!(output.contains("event_name=contextmenu"));
    assert!(output.contains("default_prevented=true"));
}

#[test]
fn test_publish_is_silent_without_trace_events() {
    let output = captured_run(BusSettings::default(), |host| {
        host.key_up("a");
    });
    assert!(!output.contains("Publishing input event"));
}

#[test]
fn test_once_subscription_through_bus() {
    let host = TestHost::new();
    let hits = Arc::new(AtomicUsize::new(0));
    let h = hits.clone();
    host.bus.once(EventName::DrawClick, move |_| {
        h.fetch_add(1, Ordering::SeqCst);
    });

    host.click_vector(0.0, 0.0);
    host.click_vector(0.0, 0.0);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(host.recorder.count(EventName::DrawClick), 2);
}

#[test]
fn test_remove_all_listeners() {
    let host = TestHost::new();
    host.bus.remove_all_listeners(Some(EventName::Keyup));
    host.key_up("a");
    host.click_vector(0.0, 0.0);
    assert_eq!(host.recorder.names(), vec!["draw_click"]);

    host.bus.remove_all_listeners(None);
    host.click_vector(0.0, 0.0);
    assert_eq!(host.recorder.events().len(), 1);
}

#[test]
fn test_default_settings_constructor() {
    let sources = InputSources {
        window: Arc::new(ListenerTable::new()),
        element: Arc::new(ListenerTable::new()),
        vector: Arc::new(ListenerTable::new()),
    };
    let bus = InputEventBus::with_default_settings(sources);
    assert_eq!(bus.settings(), &BusSettings::default());
    assert_eq!(bus.state(), BusState::default());
}
