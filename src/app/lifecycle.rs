//! Application lifecycle - initialization.

use super::state::{CanvasState, ConfigInputs, GridEditor, UiState};
use crate::input::MoveThrottle;
use crate::layout::GridLayout;
use crate::settings::Settings;
use crate::types::{ConfigField, GridConfig};
use gpui::*;
use gpui_component::input::{InputEvent, InputState};

impl GridEditor {
    pub fn new(settings: &Settings, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let config = settings.initial_grid();
        tracing::info!(
            columns = config.columns,
            rows = config.rows,
            gap = config.gap,
            "Starting grid editor"
        );

        let inputs = ConfigInputs {
            columns: config_input(&config, ConfigField::Columns, window, cx),
            rows: config_input(&config, ConfigField::Rows, window, cx),
            gap: config_input(&config, ConfigField::Gap, window, cx),
        };

        let subscriptions = ConfigField::ALL
            .iter()
            .map(|&field| {
                cx.subscribe(
                    inputs.get(field),
                    move |this, input, _event: &InputEvent, cx| {
                        let text = input.read(cx).value().to_string();
                        this.apply_config_input(field, &text, cx);
                    },
                )
            })
            .collect();

        Self {
            canvas: CanvasState::new(
                GridLayout::new(config),
                MoveThrottle::new(settings.move_throttle()),
            ),
            inputs,
            ui: UiState::default(),
            _subscriptions: subscriptions,
        }
    }
}

fn config_input(
    config: &GridConfig,
    field: ConfigField,
    window: &mut Window,
    cx: &mut Context<GridEditor>,
) -> Entity<InputState> {
    let value = config.get(field).to_string();
    cx.new(|cx| InputState::new(window, cx).default_value(value))
}
