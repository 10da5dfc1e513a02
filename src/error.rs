//! Error types for the input layer
//!
//! Raw event handling never fails; errors only come from lifecycle misuse,
//! subscription lookups, settings loading and logging setup.

use thiserror::Error;

/// Errors that can occur while managing the input bus
#[derive(Error, Debug)]
pub enum BusError {
    /// `attach()` called while listeners are already registered
    #[error("input bus is already attached")]
    AlreadyAttached,

    /// `detach()` called without a prior `attach()`
    #[error("input bus is not attached")]
    NotAttached,

    /// Semantic event name that the bus never emits
    #[error("unknown event name: {0}")]
    UnknownEvent(String),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Global subscriber could not be installed
    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// Result type alias for bus operations
pub type BusResult<T> = Result<T, BusError>;
