//! Raw input handling for the drawing surface.
//!
//! ## Architecture
//!
//! Every raw source/event pair has one handler on the bus internals. The
//! handlers update [`BusState`] through the explicit gesture state machine
//! and publish semantic events.
//!
//! ## Modules
//!
//! - `state` - Gesture state machine and positional deltas
//! - `mouse_down` - Press handling (gesture start, vector-layer notifications)
//! - `drag` - Move handling (plain move vs drag)
//! - `mouse_up` - Release handling (gesture end, key-up)
//! - `wheel` - Wheel/trackpad direction normalization

mod drag;
mod mouse_down;
mod mouse_up;
mod state;
mod wheel;

pub use state::{BusState, GestureState};
pub use wheel::normalize_wheel;
