//! Unit tests for logging setup.

use canvas_input::logging;
use canvas_input::{BusError, BusSettings};

#[test]
fn test_second_init_fails_without_panicking() {
    let settings = BusSettings::default();
    // The first call may succeed or not depending on test order; the second never does
    let _ = logging::init(&settings);
    assert!(matches!(logging::init(&settings), Err(BusError::Logging(_))));
}
