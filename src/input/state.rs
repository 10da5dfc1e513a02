//! Gesture state - primary-button tracking and positional deltas.
//!
//! ## State Transitions
//!
//! ```text
//! Up   -> Down   (primary pointer-down on the drawing surface)
//! Down -> Up     (any pointer-up on the window)
//! Up   -> Up     (pointer-move: plain move)
//! Down -> Down   (pointer-move: drag)
//! ```
//!
//! Distinguishing a drag from a plain move is purely a function of the
//! current state. There is no distance threshold.

use crate::types::{Point, PointerButton};
use serde::{Deserialize, Serialize};

/// Up/Down condition of the primary button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureState {
    #[default]
    Up,
    Down,
}

/// Pointer state shared with every pointer and wheel subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BusState {
    /// True strictly between a primary press and the next release
    pub primary_button_down: bool,
    /// Position of the most recent press (any button)
    pub down_position: Point,
    /// Position of the most recent move
    pub move_position: Point,
    /// `move_position - down_position`; stale after release until the next press
    pub move_offset: Point,
}

impl BusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gesture(&self) -> GestureState {
        if self.primary_button_down {
            GestureState::Down
        } else {
            GestureState::Up
        }
    }

    /// Record a press. Only the primary button enters the Down state.
    pub fn press(&mut self, position: Point, button: PointerButton) {
        if button.is_primary() {
            self.primary_button_down = true;
        }
        self.down_position = position;
    }

    /// Record a move. Returns true if the move is a drag.
    pub fn track_move(&mut self, position: Point) -> bool {
        self.move_position = position;
        self.move_offset = position - self.down_position;
        self.primary_button_down
    }

    /// Record a release of any button.
    pub fn release(&mut self) {
        self.primary_button_down = false;
    }
}
