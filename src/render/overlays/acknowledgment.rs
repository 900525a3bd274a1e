//! Acknowledgment modal - blocking success/failure message after a copy.

use crate::acknowledgment::Acknowledgment;
use crate::app::GridEditor;
use crate::constants::MODAL_WIDTH_SM;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{ActiveTheme as _, Icon, IconName, h_flex, v_flex};

use super::modal_base::render_modal_backdrop;

pub fn render_acknowledgment(ack: &Acknowledgment, cx: &Context<GridEditor>) -> impl IntoElement {
    let bg = cx.theme().background;
    let border = cx.theme().border;
    let fg = cx.theme().foreground;
    let (icon, accent) = if ack.is_success() {
        (IconName::Check, cx.theme().primary)
    } else {
        (IconName::Close, cx.theme().danger)
    };

    render_modal_backdrop(
        "acknowledgment-backdrop",
        v_flex()
            .w(px(MODAL_WIDTH_SM))
            .p_5()
            .gap_4()
            .bg(bg)
            .border_1()
            .border_color(border)
            .rounded(px(10.0))
            .shadow_lg()
            .child(
                h_flex()
                    .gap_2()
                    .items_center()
                    .child(Icon::new(icon).size(px(18.0)).text_color(accent))
                    .child(
                        div()
                            .text_lg()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(accent)
                            .child(ack.title()),
                    ),
            )
            .child(div().text_sm().text_color(fg).child(ack.message.clone()))
            .child(
                h_flex().justify_end().child(
                    Button::new("dismiss-acknowledgment")
                        .label("OK")
                        .primary()
                        .on_click(cx.listener(|this, _, _, cx| {
                            this.dismiss_acknowledgment(cx);
                        })),
                ),
            ),
    )
}
