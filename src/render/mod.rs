//! Rendering of the editor window.
//!
//! - `controls` - configuration fields and the add-item button
//! - `grid` - the grid area with cell guides and placed items
//! - `item` - a single item widget
//! - `markup_panel` - generated markup and the copy button
//! - `overlays` - blocking acknowledgment modal

pub mod controls;
pub mod grid;
pub mod item;
pub mod markup_panel;
pub mod overlays;

use crate::app::GridEditor;
use crate::constants::{APP_TITLE, GRID_CANVAS_WIDTH};
use crate::profile_scope;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{ActiveTheme as _, v_flex};

impl Render for GridEditor {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        profile_scope!("render_grid_editor");

        let bg = cx.theme().background;
        let fg = cx.theme().foreground;
        let border = cx.theme().border;
        let panel_bg = cx.theme().secondary;

        let markup = self.canvas.layout.render_markup();
        let acknowledgment = self.ui.acknowledgment.clone();
        let active_item = self.canvas.input_state.active_item();

        div()
            .id("grid-editor")
            .size_full()
            .relative()
            .bg(bg)
            .text_color(fg)
            // Root-level handlers play the part of document-wide listeners:
            // moves and releases are seen even after leaving the item
            .on_mouse_move(cx.listener(Self::handle_mouse_move))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            .child(
                div().id("editor-scroll").size_full().overflow_y_scroll().child(
                    v_flex()
                        .w_full()
                        .items_center()
                        .p_8()
                        .gap_6()
                        .child(
                            div()
                                .text_3xl()
                                .font_weight(FontWeight::BOLD)
                                .child(APP_TITLE),
                        )
                        .child(
                            v_flex()
                                .w(px(GRID_CANVAS_WIDTH + 48.0))
                                .p_6()
                                .gap_4()
                                .bg(panel_bg)
                                .border_1()
                                .border_color(border)
                                .rounded(px(8.0))
                                .child(controls::render_config_controls(&self.inputs, cx))
                                .child(controls::render_add_button(cx))
                                .child(grid::render_grid_area(
                                    &self.canvas.layout,
                                    active_item,
                                    self.canvas.grid_bounds.clone(),
                                    cx,
                                ))
                                .child(markup_panel::render_markup_panel(&markup, cx)),
                        ),
                ),
            )
            .when_some(acknowledgment, |d, ack| {
                d.child(overlays::render_acknowledgment(&ack, cx))
            })
    }
}
