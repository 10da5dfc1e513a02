//! Release handling - pointer-up and key-up on the window.

use crate::bus::BusInner;
use crate::events::InputEvent;
use crate::types::RawEvent;

impl BusInner {
    /// Pointer-up anywhere in the window, any button. Always leaves the Down state.
    pub(crate) fn handle_pointer_up(&self, event: &mut RawEvent) {
        let state = self.update_state(|state| state.release());
        self.publish(InputEvent::Pointerup {
            event: event.clone(),
            state,
        });
    }

    pub(crate) fn handle_key_up(&self, event: &mut RawEvent) {
        self.publish(InputEvent::Keyup {
            event: event.clone(),
        });
    }
}
