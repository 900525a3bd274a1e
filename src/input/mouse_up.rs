//! Mouse up event handling - finish the active interaction.

use crate::app::GridEditor;
use gpui::*;

impl GridEditor {
    pub fn handle_mouse_up(
        &mut self,
        _event: &MouseUpEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if let Some(item_id) = self.canvas.pointer_released() {
            tracing::trace!(item_id, "Interaction finished");
            cx.notify();
        }
    }
}
