//! Core types for the input layer.
//!
//! Raw events as the host delivers them, the geometry they carry, and the
//! direction produced by wheel normalization.

use crate::constants::{
    DOM_BUTTON_AUXILIARY, DOM_BUTTON_BACK, DOM_BUTTON_FORWARD, DOM_BUTTON_PRIMARY,
    DOM_BUTTON_SECONDARY, LEGACY_WHICH_AUXILIARY, LEGACY_WHICH_PRIMARY, LEGACY_WHICH_SECONDARY,
};
use serde::{Deserialize, Serialize};
use std::ops::Sub;

// ============================================================================
// Geometry
// ============================================================================

/// A position in host client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ============================================================================
// Buttons and Modifiers
// ============================================================================

/// Pointer button that triggered a press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    #[default]
    Primary,
    Auxiliary,
    Secondary,
    Back,
    Forward,
    Other(i16),
}

impl PointerButton {
    /// Map a DOM `button` value (0 = primary).
    pub fn from_dom_button(button: i16) -> Self {
        match button {
            DOM_BUTTON_PRIMARY => Self::Primary,
            DOM_BUTTON_AUXILIARY => Self::Auxiliary,
            DOM_BUTTON_SECONDARY => Self::Secondary,
            DOM_BUTTON_BACK => Self::Back,
            DOM_BUTTON_FORWARD => Self::Forward,
            other => Self::Other(other),
        }
    }

    /// Map a legacy `which` value (1 = primary, 2 = middle, 3 = right).
    pub fn from_which(which: u16) -> Self {
        match which {
            LEGACY_WHICH_PRIMARY => Self::Primary,
            LEGACY_WHICH_AUXILIARY => Self::Auxiliary,
            LEGACY_WHICH_SECONDARY => Self::Secondary,
            other => Self::Other(i16::try_from(other).unwrap_or(i16::MAX)),
        }
    }

    #[inline]
    pub fn is_primary(self) -> bool {
        matches!(self, Self::Primary)
    }
}

/// Keyboard modifiers held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }
}

// ============================================================================
// Raw Event Payloads
// ============================================================================

/// Pointer press, release, move, click or context-menu payload.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerEvent {
    pub position: Point,
    pub button: PointerButton,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            ..Default::default()
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }
}

/// Wheel payload.
///
/// Hosts report either the standardized `delta_*` fields or the legacy
/// `wheel_delta_*` / `detail` fields; absent legacy fields are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WheelEvent {
    pub position: Point,
    pub delta_x: f64,
    pub delta_y: f64,
    pub wheel_delta_x: Option<f64>,
    pub wheel_delta_y: Option<f64>,
    pub detail: Option<f64>,
    pub modifiers: Modifiers,
}

/// Key release payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: String,
    pub code: String,
    pub modifiers: Modifiers,
}

// ============================================================================
// Raw Events
// ============================================================================

/// Kind of raw host event, used as the subscription key on event targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Click,
    PointerDown,
    PointerMove,
    PointerUp,
    Wheel,
    ContextMenu,
    KeyUp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventData {
    Click(PointerEvent),
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    PointerUp(PointerEvent),
    Wheel(WheelEvent),
    ContextMenu(PointerEvent),
    KeyUp(KeyEvent),
}

/// A raw event as dispatched by the host, with its dispatch flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    pub data: EventData,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl RawEvent {
    pub fn new(data: EventData) -> Self {
        Self {
            data,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn click(event: PointerEvent) -> Self {
        Self::new(EventData::Click(event))
    }

    pub fn pointer_down(event: PointerEvent) -> Self {
        Self::new(EventData::PointerDown(event))
    }

    pub fn pointer_move(event: PointerEvent) -> Self {
        Self::new(EventData::PointerMove(event))
    }

    pub fn pointer_up(event: PointerEvent) -> Self {
        Self::new(EventData::PointerUp(event))
    }

    pub fn wheel(event: WheelEvent) -> Self {
        Self::new(EventData::Wheel(event))
    }

    pub fn context_menu(event: PointerEvent) -> Self {
        Self::new(EventData::ContextMenu(event))
    }

    pub fn key_up(event: KeyEvent) -> Self {
        Self::new(EventData::KeyUp(event))
    }

    pub fn kind(&self) -> EventKind {
        match self.data {
            EventData::Click(_) => EventKind::Click,
            EventData::PointerDown(_) => EventKind::PointerDown,
            EventData::PointerMove(_) => EventKind::PointerMove,
            EventData::PointerUp(_) => EventKind::PointerUp,
            EventData::Wheel(_) => EventKind::Wheel,
            EventData::ContextMenu(_) => EventKind::ContextMenu,
            EventData::KeyUp(_) => EventKind::KeyUp,
        }
    }

    /// Pointer payload, if this is a pointer-family event
    pub fn pointer(&self) -> Option<&PointerEvent> {
        match &self.data {
            EventData::Click(p)
            | EventData::PointerDown(p)
            | EventData::PointerMove(p)
            | EventData::PointerUp(p)
            | EventData::ContextMenu(p) => Some(p),
            _ => None,
        }
    }

    pub fn wheel_data(&self) -> Option<&WheelEvent> {
        match &self.data {
            EventData::Wheel(w) => Some(w),
            _ => None,
        }
    }

    /// Position carried by the event; key events report the origin.
    pub fn position(&self) -> Point {
        match &self.data {
            EventData::Wheel(w) => w.position,
            EventData::KeyUp(_) => Point::ZERO,
            _ => self.pointer().map(|p| p.position).unwrap_or_default(),
        }
    }

    /// Ask the host to skip its default action (scroll, native menu, text selection)
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Ask the host not to bubble the event further up its tree
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

// ============================================================================
// Direction
// ============================================================================

/// Discrete direction produced by wheel normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
