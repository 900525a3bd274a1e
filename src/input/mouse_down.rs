//! Mouse down event handling - drag/resize initiation on grid items.

use crate::app::GridEditor;
use crate::input::{CoordinateSpace, PointerPosition, PointerTarget};
use crate::types::ItemId;
use gpui::*;

impl GridEditor {
    /// Handle a left-button press on an item's body or resize handle.
    ///
    /// The grid bounds measured at the last paint are converted into a
    /// coordinate space once here and reused for the whole interaction.
    pub fn handle_item_mouse_down(
        &mut self,
        item_id: ItemId,
        target: PointerTarget,
        event: &MouseDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        // The handle and the body overlap; the handle must not also start a move
        cx.stop_propagation();
        window.prevent_default();

        if self.is_blocked() {
            return;
        }

        let Some(item) = self.canvas.layout.get_item(item_id).copied() else {
            return;
        };

        let bounds = self.canvas.grid_bounds.borrow().clone();
        let Some(bounds) = bounds else {
            tracing::debug!("Grid not painted yet, ignoring pointer down");
            return;
        };

        let config = *self.canvas.layout.config();
        let Some(space) = CoordinateSpace::from_bounds(bounds, &config) else {
            tracing::debug!(
                columns = config.columns,
                rows = config.rows,
                "Grid has no positive tracks, interaction disabled"
            );
            return;
        };

        let pointer = PointerPosition::from(event.position);
        self.canvas.input_state.begin(target, &item, space, pointer);
        self.canvas.throttle.reset();
        tracing::trace!(item_id, ?target, "Interaction started");
        cx.notify();
    }
}
