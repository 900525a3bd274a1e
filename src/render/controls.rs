//! Configuration controls - column/row/gap fields and the add-item button.

use crate::app::{ConfigInputs, GridEditor};
use crate::constants::CONFIG_INPUT_WIDTH;
use crate::types::ConfigField;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::input::Input;
use gpui_component::{ActiveTheme as _, IconName, h_flex, v_flex};

/// Render one labeled numeric field
fn render_config_field(field: ConfigField, inputs: &ConfigInputs, cx: &Context<GridEditor>) -> Div {
    let muted_fg = cx.theme().muted_foreground;

    v_flex()
        .gap_1()
        .child(
            div()
                .text_sm()
                .font_weight(FontWeight::MEDIUM)
                .text_color(muted_fg)
                .child(field.label()),
        )
        .child(
            div()
                .w(px(CONFIG_INPUT_WIDTH))
                .child(Input::new(inputs.get(field))),
        )
}

/// Render the configuration row
pub fn render_config_controls(inputs: &ConfigInputs, cx: &Context<GridEditor>) -> Div {
    h_flex()
        .gap_4()
        .children(ConfigField::ALL.map(|field| render_config_field(field, inputs, cx)))
}

/// Render the full-width add-item button
pub fn render_add_button(cx: &Context<GridEditor>) -> impl IntoElement {
    Button::new("add-grid-item")
        .icon(IconName::Plus)
        .label("Add Grid Item")
        .primary()
        .w_full()
        .on_click(cx.listener(|this, _, _, cx| {
            this.add_item(cx);
        }))
}
