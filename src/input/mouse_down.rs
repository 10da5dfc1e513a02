//! Pointer-down handling - press tracking and drawing-surface notifications.

use crate::bus::BusInner;
use crate::events::InputEvent;
use crate::types::RawEvent;

impl BusInner {
    /// Pointer-down on the drawing surface element. Enters the Down state
    /// for the primary button; every press records its position.
    pub(crate) fn handle_pointer_down(&self, event: &mut RawEvent) {
        let Some(pointer) = event.pointer().copied() else {
            return;
        };
        let state = self.update_state(|state| state.press(pointer.position, pointer.button));
        self.publish(InputEvent::Pointerdown {
            event: event.clone(),
            state,
        });
    }

    /// Pointer-down on the vector layer.
    pub(crate) fn handle_draw_mousedown(&self, event: &mut RawEvent) {
        self.publish(InputEvent::DrawMousedown {
            event: event.clone(),
        });
    }

    /// Second vector-layer pointer-down binding; fires for the same physical
    /// press as `handle_draw_mousedown`.
    pub(crate) fn handle_svg_mousedown(&self, event: &mut RawEvent) {
        self.publish(InputEvent::SvgMousedown {
            event: event.clone(),
        });
    }

    pub(crate) fn handle_draw_click(&self, event: &mut RawEvent) {
        self.publish(InputEvent::DrawClick {
            event: event.clone(),
        });
    }

    /// Context menu on the vector layer; the native menu is always suppressed.
    pub(crate) fn handle_context_menu(&self, event: &mut RawEvent) {
        event.prevent_default();
        self.publish(InputEvent::Contextmenu {
            event: event.clone(),
        });
    }
}
