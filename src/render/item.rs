//! Item widget rendering - one placed item with its delete and resize controls.
//!
//! Placement is derived entirely from the item's `(x, y, w, h)`; the widget
//! keeps no position state of its own.

use crate::app::GridEditor;
use crate::constants::{ITEM_CONTROL_INSET, RESIZE_HANDLE_SIZE};
use crate::input::{CellRect, PointerTarget};
use crate::types::GridItem;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{ActiveTheme as _, Icon, IconName};

/// Render a grid item at the given pixel rectangle
pub fn render_grid_item(
    item: &GridItem,
    rect: CellRect,
    is_active: bool,
    in_bounds: bool,
    cx: &Context<GridEditor>,
) -> Div {
    let item_id = item.id;
    let primary = cx.theme().primary;
    let danger = cx.theme().danger;
    let bg = cx.theme().background;
    let muted_fg = cx.theme().muted_foreground;

    div()
        .absolute()
        .left(px(rect.left))
        .top(px(rect.top))
        .w(px(rect.width))
        .h(px(rect.height))
        .bg(bg)
        .border_2()
        .border_color(primary)
        .rounded(px(6.0))
        .flex()
        .items_center()
        .justify_center()
        .cursor(CursorStyle::OpenHand)
        // Items left outside a shrunken grid stay in the model and markup
        .when(!in_bounds, |d| d.border_color(danger))
        .when(is_active, |d| d.shadow_lg().cursor(CursorStyle::ClosedHand))
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(move |this, event: &MouseDownEvent, window, cx| {
                this.handle_item_mouse_down(item_id, PointerTarget::Body, event, window, cx);
            }),
        )
        // Delete button - top-right corner
        .child(
            div()
                .id(ElementId::Name(format!("remove-item-{}", item_id).into()))
                .absolute()
                .top(px(ITEM_CONTROL_INSET))
                .right(px(ITEM_CONTROL_INSET))
                .cursor_pointer()
                .hover(|s| s.opacity(0.7))
                .on_mouse_down(MouseButton::Left, |_, _, cx| {
                    cx.stop_propagation();
                })
                .on_click(cx.listener(move |this, _, _, cx| {
                    this.remove_item(item_id, cx);
                }))
                .child(Icon::new(IconName::Close).size(px(14.0)).text_color(danger)),
        )
        // Resize handle - bottom-right corner
        .child(
            div()
                .absolute()
                .right(px(ITEM_CONTROL_INSET))
                .bottom(px(ITEM_CONTROL_INSET))
                .w(px(RESIZE_HANDLE_SIZE))
                .h(px(RESIZE_HANDLE_SIZE))
                .rounded_full()
                .bg(primary)
                .cursor(CursorStyle::ResizeUpLeftDownRight)
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(move |this, event: &MouseDownEvent, window, cx| {
                        this.handle_item_mouse_down(
                            item_id,
                            PointerTarget::ResizeHandle,
                            event,
                            window,
                            cx,
                        );
                    }),
                ),
        )
        .child(
            div()
                .text_sm()
                .text_color(muted_fg)
                .child(item.label()),
        )
}
