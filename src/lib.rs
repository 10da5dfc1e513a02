//! Input event bus for a diagram editor canvas.
//!
//! Translates raw pointer, wheel and keyboard events from a host window and
//! a drawing surface into a stream of semantic events (`pointerdown`, `drag`,
//! `mousewheel`, ...) published to editor subscribers.

pub mod bus;
pub mod constants;
pub mod emitter;
pub mod error;
pub mod events;
pub mod input;
pub mod logging;
pub mod perf;
pub mod settings;
pub mod subscription;
pub mod target;
pub mod types;

pub use bus::InputEventBus;
pub use emitter::{Emitter, SubscriptionId};
pub use error::{BusError, BusResult};
pub use events::{EventName, InputEvent};
pub use input::{normalize_wheel, BusState, GestureState};
pub use settings::BusSettings;
pub use target::{EventTarget, InputSources, Listener, ListenerTable, SourceKind};
pub use types::*;
