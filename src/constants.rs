//! Input-layer constants.
//!
//! Centralizes host button numbering and semantic event names so handlers
//! and subscribers never spell them out by hand.

// ============================================================================
// Host Button Numbering
// ============================================================================

/// DOM `button` value of the primary (usually left) pointer button
pub const DOM_BUTTON_PRIMARY: i16 = 0;

/// DOM `button` value of the auxiliary (usually middle) pointer button
pub const DOM_BUTTON_AUXILIARY: i16 = 1;

/// DOM `button` value of the secondary (usually right) pointer button
pub const DOM_BUTTON_SECONDARY: i16 = 2;

/// DOM `button` value of the "browser back" button
pub const DOM_BUTTON_BACK: i16 = 3;

/// DOM `button` value of the "browser forward" button
pub const DOM_BUTTON_FORWARD: i16 = 4;

/// Legacy `which` value of the primary button (1-based numbering)
pub const LEGACY_WHICH_PRIMARY: u16 = 1;

/// Legacy `which` value of the middle button
pub const LEGACY_WHICH_AUXILIARY: u16 = 2;

/// Legacy `which` value of the right button
pub const LEGACY_WHICH_SECONDARY: u16 = 3;

// ============================================================================
// Semantic Event Names
// ============================================================================

pub const EVENT_DRAW_CLICK: &str = "draw_click";
pub const EVENT_DRAW_MOUSEDOWN: &str = "draw_mousedown";
pub const EVENT_SVG_MOUSEDOWN: &str = "svg_mousedown";
pub const EVENT_POINTERDOWN: &str = "pointerdown";
pub const EVENT_POINTERMOVE: &str = "pointermove";
pub const EVENT_DRAG: &str = "drag";
pub const EVENT_POINTERUP: &str = "pointerup";
pub const EVENT_MOUSEWHEEL: &str = "mousewheel";
pub const EVENT_CONTEXTMENU: &str = "contextmenu";
pub const EVENT_KEYUP: &str = "keyup";

// ============================================================================
// Profiling
// ============================================================================

/// Dispatch time above which a single input handler is reported as slow
pub const SLOW_DISPATCH_MS: f64 = 4.0;

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "canvas-input";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Log filter used when neither `RUST_LOG` nor the settings file provide one
pub const DEFAULT_LOG_FILTER: &str = "info";
