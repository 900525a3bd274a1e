//! Shared modal utilities - blocking backdrop.

use crate::constants::MODAL_BACKDROP_OPACITY;
use gpui::*;

/// Renders a modal backdrop that swallows all pointer input beneath it.
///
/// The backdrop does not close on click; the modal content must offer its
/// own dismiss control.
pub fn render_modal_backdrop(id: impl Into<ElementId>, child: impl IntoElement) -> impl IntoElement {
    deferred(
        div()
            .id(id)
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .bg(hsla(0.0, 0.0, 0.0, MODAL_BACKDROP_OPACITY))
            .flex()
            .items_center()
            .justify_center()
            .occlude()
            .on_mouse_down(MouseButton::Left, |_, _, cx| {
                cx.stop_propagation();
            })
            .on_scroll_wheel(|_, _, cx| {
                cx.stop_propagation();
            })
            .child(child),
    )
    .with_priority(1500)
}
