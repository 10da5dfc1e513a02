//! Bus settings loaded from a JSON file.
//!
//! Every field has a default, so an empty object (or a missing file when
//! using [`BusSettings::load_or_default`]) yields a working configuration.

use crate::constants::{DEFAULT_LOG_FILTER, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME};
use crate::error::BusResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusSettings {
    /// Log every emitted semantic event at `trace` level
    pub trace_events: bool,
    /// Filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for BusSettings {
    fn default() -> Self {
        Self {
            trace_events: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl BusSettings {
    pub fn from_json(json: &str) -> BusResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> BusResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    /// Load settings, falling back to defaults on any error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Using default input settings, {:?} unreadable: {}", path, e);
                Self::default()
            }
        }
    }
}

/// `<config dir>/canvas-input/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}
