//! Wheel normalization - scroll wheels and trackpads to one of four directions.
//!
//! Trackpad pinch-zoom arrives as a ctrl+wheel event carrying the
//! standardized `delta_*` fields, with an inverted sign relative to legacy
//! wheel ticks. Without ctrl, the legacy `wheel_delta_*` fields are used,
//! falling back to `detail` for hosts that only report a single magnitude.
//!
//! Each axis is classified independently, horizontal first. When both axes
//! classify, the vertical result is written last and wins.

use crate::bus::BusInner;
use crate::events::InputEvent;
use crate::profile_scope;
use crate::types::{Direction, RawEvent, WheelEvent};

/// Classify a wheel event. `None` when no axis delta is non-zero.
pub fn normalize_wheel(event: &WheelEvent) -> Option<Direction> {
    let (horizontal, vertical) = if event.modifiers.ctrl {
        (Some(event.delta_x), Some(event.delta_y))
    } else {
        (
            legacy_axis(event.wheel_delta_x, event.detail),
            legacy_axis(event.wheel_delta_y, event.detail),
        )
    };

    let mut dir = None;
    if let Some(d) = horizontal {
        if d > 0.0 {
            dir = Some(Direction::Left);
        }
        if d < 0.0 {
            dir = Some(Direction::Right);
        }
    }
    if let Some(d) = vertical {
        if d > 0.0 {
            dir = Some(Direction::Up);
        }
        if d < 0.0 {
            dir = Some(Direction::Down);
        }
    }
    dir
}

/// Dedicated axis value unless absent, zero or NaN; then the unified magnitude.
fn legacy_axis(dedicated: Option<f64>, detail: Option<f64>) -> Option<f64> {
    dedicated.filter(|d| *d != 0.0 && !d.is_nan()).or(detail)
}

impl BusInner {
    /// Wheel on the drawing surface element.
    pub(crate) fn handle_wheel(&self, event: &mut RawEvent) {
        profile_scope!("handle_wheel");

        event.stop_propagation();
        event.prevent_default();

        let Some(wheel) = event.wheel_data() else {
            return;
        };
        let dir = normalize_wheel(wheel);
        let state = self.state();
        self.publish(InputEvent::Mousewheel {
            event: event.clone(),
            dir,
            state,
        });
    }
}
