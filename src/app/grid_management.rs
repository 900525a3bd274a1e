//! Grid management methods - item CRUD and configuration edits

use super::GridEditor;
use crate::types::{ConfigField, ItemId, parse_config_value};
use gpui::*;

impl GridEditor {
    /// Append a new item at the top-left cell
    pub fn add_item(&mut self, cx: &mut Context<Self>) {
        if self.is_blocked() {
            return;
        }
        self.canvas.layout.add_item();
        cx.notify();
    }

    /// Remove an item, ending any interaction that targets it
    pub fn remove_item(&mut self, id: ItemId, cx: &mut Context<Self>) {
        if self.is_blocked() {
            return;
        }
        if self.canvas.remove_item(id) {
            cx.notify();
        }
    }

    /// Apply the text of a configuration field.
    ///
    /// Any integer is accepted as-is; text that does not parse keeps the
    /// previous value.
    pub fn apply_config_input(&mut self, field: ConfigField, text: &str, cx: &mut Context<Self>) {
        let Some(value) = parse_config_value(text) else {
            return;
        };
        if self.canvas.layout.config().get(field) == value {
            return;
        }
        tracing::debug!(field = field.label(), value, "Grid configuration changed");
        self.canvas.layout.set_config_field(field, value);
        cx.notify();
    }
}
