//! Pointer-move handling - plain moves and drags.
//!
//! Pointer-move is the hottest input path (one event per frame or more while
//! the pointer is over the window), so it only touches the four state fields
//! and emits. Enable `--features profiling` to see timing.

use crate::bus::BusInner;
use crate::events::InputEvent;
use crate::profile_scope;
use crate::types::RawEvent;

impl BusInner {
    /// Pointer-move on the window. Always emits `pointermove`; while the
    /// primary button is down it also suppresses the host default (text
    /// selection) and emits `drag`.
    pub(crate) fn handle_pointer_move(&self, event: &mut RawEvent) {
        profile_scope!("handle_pointer_move");

        let Some(pointer) = event.pointer().copied() else {
            return;
        };
        let mut dragging = false;
        let state = self.update_state(|state| dragging = state.track_move(pointer.position));

        self.publish(InputEvent::Pointermove {
            event: event.clone(),
            state,
        });
        if dragging {
            event.prevent_default();
            self.publish(InputEvent::Drag {
                event: event.clone(),
                state,
            });
        }
    }
}
