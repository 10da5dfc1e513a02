//! Logging setup for hosts that do not install their own subscriber.

use crate::error::{BusError, BusResult};
use crate::settings::BusSettings;
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `settings.log_filter`. Fails instead of
/// panicking when a global subscriber is already set.
pub fn init(settings: &BusSettings) -> BusResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .map_err(|e| BusError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| BusError::Logging(e.to_string()))
}
