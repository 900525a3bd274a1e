//! Generated markup panel - live listing plus the copy button.

use crate::app::GridEditor;
use crate::constants::DEFAULT_CODE_FONT;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{ActiveTheme as _, IconName, h_flex, v_flex};

pub fn render_markup_panel(markup: &str, cx: &Context<GridEditor>) -> Div {
    let muted = cx.theme().muted;
    let fg = cx.theme().foreground;

    v_flex()
        .w_full()
        .gap_2()
        .child(
            h_flex()
                .w_full()
                .items_center()
                .justify_between()
                .child(
                    div()
                        .text_lg()
                        .font_weight(FontWeight::SEMIBOLD)
                        .child("Generated HTML"),
                )
                .child(
                    Button::new("copy-markup")
                        .icon(IconName::Copy)
                        .label("Copy HTML")
                        .primary()
                        .on_click(cx.listener(|this, _, _, cx| {
                            this.export_to_clipboard(cx);
                        })),
                ),
        )
        .child(
            v_flex()
                .w_full()
                .p_4()
                .rounded(px(6.0))
                .bg(muted)
                .font_family(DEFAULT_CODE_FONT)
                .text_sm()
                .text_color(fg)
                .children(
                    markup
                        .lines()
                        .map(|line| div().whitespace_nowrap().child(line.to_string())),
                ),
        )
}
