//! Input state machine - drag and resize of grid items.
//!
//! A single explicit state replaces per-item listener bookkeeping: the root
//! element forwards every pointer move and release here, and only a non-idle
//! state turns them into item updates.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingItem     (pointer down on item body)
//! Idle -> ResizingItem     (pointer down on item resize handle)
//!
//! Any -> Idle              (pointer up, or removal of the active item)
//! ```

use super::coords::{CoordinateSpace, PointerPosition, clamp_span, clamp_to_grid};
use crate::types::{GridConfig, GridItem, ItemId, ItemPatch};

/// Which part of an item received the pointer down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The item body - starts a move
    Body,
    /// The corner handle - starts a resize
    ResizeHandle,
}

/// An update the active interaction wants applied to the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemUpdate {
    pub item_id: ItemId,
    pub patch: ItemPatch,
}

/// Unified input state for item interactions.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No active input operation
    #[default]
    Idle,

    /// Moving an item's origin cell
    DraggingItem {
        item_id: ItemId,
        /// Grid mapping captured at drag start
        space: CoordinateSpace,
    },

    /// Changing an item's span
    ResizingItem {
        item_id: ItemId,
        /// Grid mapping captured at resize start
        space: CoordinateSpace,
        /// Pointer position at start of resize
        start_pos: PointerPosition,
        /// Span at start of resize
        start_size: (i32, i32),
        /// Origin cell, fixed for the whole resize
        origin: (i32, i32),
    },
}

impl InputState {
    /// Start an interaction for a pointer down on `item`.
    ///
    /// Any interaction already in progress is replaced.
    pub fn begin(
        &mut self,
        target: PointerTarget,
        item: &GridItem,
        space: CoordinateSpace,
        pointer: PointerPosition,
    ) {
        match target {
            PointerTarget::Body => self.start_dragging(item.id, space),
            PointerTarget::ResizeHandle => self.start_resizing(item, space, pointer),
        }
    }

    /// Start moving an item
    pub fn start_dragging(&mut self, item_id: ItemId, space: CoordinateSpace) {
        *self = Self::DraggingItem { item_id, space };
    }

    /// Start resizing an item from the given pointer position
    pub fn start_resizing(&mut self, item: &GridItem, space: CoordinateSpace, start_pos: PointerPosition) {
        *self = Self::ResizingItem {
            item_id: item.id,
            space,
            start_pos,
            start_size: (item.w, item.h),
            origin: (item.x, item.y),
        };
    }

    /// Translate a pointer move into an item update.
    ///
    /// Returns `None` while idle. Every move during an interaction yields an
    /// update, even when the clamped result equals the current value.
    pub fn on_move(&self, pointer: PointerPosition, config: &GridConfig) -> Option<ItemUpdate> {
        match self {
            Self::Idle => None,
            Self::DraggingItem { item_id, space } => {
                let (x, y) = clamp_to_grid(space.pointer_to_cell(pointer), config);
                Some(ItemUpdate {
                    item_id: *item_id,
                    patch: ItemPatch::position(x, y),
                })
            }
            Self::ResizingItem {
                item_id,
                space,
                start_pos,
                start_size,
                origin,
            } => {
                let (dx, dy) = space.delta_to_cells(*start_pos, pointer);
                let w = clamp_span(start_size.0.saturating_add(dx), origin.0, config.columns);
                let h = clamp_span(start_size.1.saturating_add(dy), origin.1, config.rows);
                Some(ItemUpdate {
                    item_id: *item_id,
                    patch: ItemPatch::size(w, h),
                })
            }
        }
    }

    /// Finish the current interaction, returning the item it acted on
    pub fn end(&mut self) -> Option<ItemId> {
        let item = self.active_item();
        *self = Self::Idle;
        item
    }

    /// End the interaction if it acts on `item_id`.
    ///
    /// Returns true if an interaction was cancelled.
    pub fn cancel_if_active(&mut self, item_id: ItemId) -> bool {
        if self.active_item() != Some(item_id) {
            return false;
        }
        *self = Self::Idle;
        true
    }

    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if currently moving an item
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::DraggingItem { .. })
    }

    /// Returns true if currently resizing an item
    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::ResizingItem { .. })
    }

    /// Get the item the current interaction acts on, if any
    pub fn active_item(&self) -> Option<ItemId> {
        match self {
            Self::Idle => None,
            Self::DraggingItem { item_id, .. } | Self::ResizingItem { item_id, .. } => Some(*item_id),
        }
    }

    /// Get the coordinate space captured at interaction start
    pub fn space(&self) -> Option<CoordinateSpace> {
        match self {
            Self::Idle => None,
            Self::DraggingItem { space, .. } | Self::ResizingItem { space, .. } => Some(*space),
        }
    }
}
