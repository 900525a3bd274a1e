//! Grid layout - the canvas controller's model.
//!
//! `GridLayout` owns the grid configuration and the ordered item collection.
//! Items keep insertion order and are addressed by identifier; identifiers
//! come from a counter that only ever grows, so a removed id is never reused.
//!
//! Mutations never validate bounds. Clamping happens in the interaction
//! layer before an update reaches the layout.

use crate::constants::FIRST_ITEM_ID;
use crate::markup::render_markup;
use crate::types::{ConfigField, GridConfig, GridItem, ItemId, ItemPatch};
use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    config: GridConfig,
    items: Vec<GridItem>,
    next_item_id: ItemId,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl GridLayout {
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
            next_item_id: FIRST_ITEM_ID,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn items(&self) -> &[GridItem] {
        &self.items
    }

    /// Identifier the next `add_item` call will hand out
    pub fn next_item_id(&self) -> ItemId {
        self.next_item_id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get_item(&self, id: ItemId) -> Option<&GridItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Append an item at `(1, 1)` spanning one cell and return its id.
    pub fn add_item(&mut self) -> ItemId {
        let id = self.next_item_id;
        self.items.push(GridItem::new(id));
        self.next_item_id += 1;
        debug!(id, count = self.items.len(), "grid item added");
        id
    }

    /// Apply `patch` to the item with `id`.
    ///
    /// Returns false, changing nothing, if no such item exists.
    pub fn update_item(&mut self, id: ItemId, patch: ItemPatch) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.apply(&patch);
                true
            }
            None => {
                debug!(id, "update for unknown grid item ignored");
                false
            }
        }
    }

    /// Remove the item with `id`. Returns false if no such item exists.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            debug!(id, count = self.items.len(), "grid item removed");
        } else {
            debug!(id, "removal of unknown grid item ignored");
        }
        removed
    }

    pub fn set_config(&mut self, config: GridConfig) {
        self.config = config;
    }

    /// Overwrite one configuration field as-is
    pub fn set_config_field(&mut self, field: ConfigField, value: i32) {
        self.config.set(field, value);
    }

    /// Markup for the current state
    pub fn render_markup(&self) -> String {
        render_markup(&self.config, &self.items)
    }
}
