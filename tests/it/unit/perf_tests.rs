//! Unit tests for perf module.

use canvas_input::perf::{measure, DispatchMonitor, DispatchStats, ScopedTimer};

#[test]
fn test_dispatch_stats_average() {
    let mut stats = DispatchStats::default();
    stats.record(1.0);
    stats.record(2.0);
    stats.record(3.0);

    assert!((stats.average() - 2.0).abs() < 0.001);
    assert_eq!(stats.count(), 3);
    assert!((stats.max_ms() - 3.0).abs() < 0.001);
    assert!(stats.p95() >= 2.0);
}

#[test]
fn test_monitor_keys_by_handler() {
    let mut monitor = DispatchMonitor::new();
    monitor.record("pointer_move", 0.1);
    monitor.record("pointer_move", 0.3);
    monitor.record("wheel", 0.2);

    assert_eq!(monitor.get("pointer_move").map(|s| s.count()), Some(2));
    assert_eq!(monitor.get("wheel").map(|s| s.count()), Some(1));
    assert!(monitor.get("key_up").is_none());

    monitor.reset();
    assert!(monitor.get("pointer_move").is_none());
}

#[test]
fn test_scoped_timer_creation() {
    // High threshold: dropping must not warn or panic
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert_eq!(timer.name(), "test_op");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_measure_returns_result() {
    let (value, elapsed_ms) = measure(|| 6 * 7);
    assert_eq!(value, 42);
    assert!(elapsed_ms >= 0.0);
}
