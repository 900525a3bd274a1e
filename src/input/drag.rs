//! Drag operations - item moving and resizing.
//!
//! ## Performance Notes
//!
//! Mouse move is called very frequently during an interaction. Each admitted
//! move applies exactly one item update; idle moves exit immediately. Moves
//! held back by the throttle are applied on release.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::app::GridEditor;
use crate::input::PointerPosition;
use crate::profile_scope;
use gpui::*;
use std::time::Instant;

impl GridEditor {
    pub fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.canvas.input_state.is_idle() {
            return;
        }
        profile_scope!("handle_mouse_move");

        let pointer = PointerPosition::from(event.position);
        if self.canvas.pointer_moved(pointer, Instant::now()) {
            cx.notify();
        }
    }
}
