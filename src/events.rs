//! Semantic events published by the bus.
//!
//! Each variant carries the raw event that produced it; pointer and wheel
//! events also carry a snapshot of the bus state taken after the update.

use crate::constants::*;
use crate::error::BusError;
use crate::input::BusState;
use crate::types::{Direction, RawEvent};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Subscription key for semantic events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    DrawClick,
    DrawMousedown,
    SvgMousedown,
    Pointerdown,
    Pointermove,
    Drag,
    Pointerup,
    Mousewheel,
    Contextmenu,
    Keyup,
}

impl EventName {
    pub const ALL: [EventName; 10] = [
        EventName::DrawClick,
        EventName::DrawMousedown,
        EventName::SvgMousedown,
        EventName::Pointerdown,
        EventName::Pointermove,
        EventName::Drag,
        EventName::Pointerup,
        EventName::Mousewheel,
        EventName::Contextmenu,
        EventName::Keyup,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::DrawClick => EVENT_DRAW_CLICK,
            Self::DrawMousedown => EVENT_DRAW_MOUSEDOWN,
            Self::SvgMousedown => EVENT_SVG_MOUSEDOWN,
            Self::Pointerdown => EVENT_POINTERDOWN,
            Self::Pointermove => EVENT_POINTERMOVE,
            Self::Drag => EVENT_DRAG,
            Self::Pointerup => EVENT_POINTERUP,
            Self::Mousewheel => EVENT_MOUSEWHEEL,
            Self::Contextmenu => EVENT_CONTEXTMENU,
            Self::Keyup => EVENT_KEYUP,
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventName {
    type Err = BusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| BusError::UnknownEvent(s.to_string()))
    }
}

/// A normalized event, decoupled from the raw input that triggered it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "name")]
pub enum InputEvent {
    #[serde(rename = "draw_click")]
    DrawClick { event: RawEvent },
    #[serde(rename = "draw_mousedown")]
    DrawMousedown { event: RawEvent },
    #[serde(rename = "svg_mousedown")]
    SvgMousedown { event: RawEvent },
    #[serde(rename = "pointerdown")]
    Pointerdown { event: RawEvent, state: BusState },
    #[serde(rename = "pointermove")]
    Pointermove { event: RawEvent, state: BusState },
    #[serde(rename = "drag")]
    Drag { event: RawEvent, state: BusState },
    #[serde(rename = "pointerup")]
    Pointerup { event: RawEvent, state: BusState },
    #[serde(rename = "mousewheel")]
    Mousewheel {
        event: RawEvent,
        dir: Option<Direction>,
        state: BusState,
    },
    #[serde(rename = "contextmenu")]
    Contextmenu { event: RawEvent },
    #[serde(rename = "keyup")]
    Keyup { event: RawEvent },
}

impl InputEvent {
    pub fn name(&self) -> EventName {
        match self {
            Self::DrawClick { .. } => EventName::DrawClick,
            Self::DrawMousedown { .. } => EventName::DrawMousedown,
            Self::SvgMousedown { .. } => EventName::SvgMousedown,
            Self::Pointerdown { .. } => EventName::Pointerdown,
            Self::Pointermove { .. } => EventName::Pointermove,
            Self::Drag { .. } => EventName::Drag,
            Self::Pointerup { .. } => EventName::Pointerup,
            Self::Mousewheel { .. } => EventName::Mousewheel,
            Self::Contextmenu { .. } => EventName::Contextmenu,
            Self::Keyup { .. } => EventName::Keyup,
        }
    }

    pub fn raw(&self) -> &RawEvent {
        match self {
            Self::DrawClick { event }
            | Self::DrawMousedown { event }
            | Self::SvgMousedown { event }
            | Self::Pointerdown { event, .. }
            | Self::Pointermove { event, .. }
            | Self::Drag { event, .. }
            | Self::Pointerup { event, .. }
            | Self::Mousewheel { event, .. }
            | Self::Contextmenu { event }
            | Self::Keyup { event } => event,
        }
    }

    /// Bus state snapshot, for pointer and wheel events
    pub fn state(&self) -> Option<&BusState> {
        match self {
            Self::Pointerdown { state, .. }
            | Self::Pointermove { state, .. }
            | Self::Drag { state, .. }
            | Self::Pointerup { state, .. }
            | Self::Mousewheel { state, .. } => Some(state),
            _ => None,
        }
    }

    /// Resolved wheel direction; `None` for every other event and for
    /// wheel events with no dominant axis.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::Mousewheel { dir, .. } => *dir,
            _ => None,
        }
    }
}
