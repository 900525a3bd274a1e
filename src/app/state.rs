//! Application state - the GridEditor struct definition and sub-structs.

use crate::acknowledgment::Acknowledgment;
use crate::input::InputState as CanvasInputState;
use crate::input::{ItemUpdate, MoveThrottle, PointerPosition};
use crate::layout::GridLayout;
use crate::types::{ConfigField, ItemId};
use gpui::*;
use gpui_component::input::InputState;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

/// Grid bounds measured during the last paint, shared with the canvas element
pub type SharedBounds = Rc<RefCell<Option<Bounds<Pixels>>>>;

/// Canvas state - layout model and the active interaction
pub struct CanvasState {
    /// Grid configuration and items
    pub layout: GridLayout,
    /// Input state machine for drag/resize
    pub input_state: CanvasInputState,
    /// Rate limit for pointer moves during an interaction
    pub throttle: MoveThrottle,
    /// On-screen bounds of the grid area, written at prepaint
    pub grid_bounds: SharedBounds,
}

impl CanvasState {
    pub fn new(layout: GridLayout, throttle: MoveThrottle) -> Self {
        Self {
            layout,
            input_state: CanvasInputState::default(),
            throttle,
            grid_bounds: Rc::new(RefCell::new(None)),
        }
    }

    /// Feed a pointer move arriving at `now` to the active interaction.
    ///
    /// Returns true if the layout changed.
    pub fn pointer_moved(&mut self, pointer: PointerPosition, now: Instant) -> bool {
        if self.input_state.is_idle() || !self.throttle.admit(now, pointer) {
            return false;
        }
        self.apply_move(pointer)
    }

    /// Finish the active interaction.
    ///
    /// A move held back by the throttle is applied first so the item ends
    /// where the pointer was last seen.
    pub fn pointer_released(&mut self) -> Option<ItemId> {
        if let Some(pointer) = self.throttle.take_pending() {
            self.apply_move(pointer);
        }
        self.throttle.reset();
        self.input_state.end()
    }

    /// Remove an item, ending the interaction if it targets that item
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        if self.input_state.cancel_if_active(id) {
            self.throttle.reset();
        }
        self.layout.remove_item(id)
    }

    fn apply_move(&mut self, pointer: PointerPosition) -> bool {
        let config = *self.layout.config();
        match self.input_state.on_move(pointer, &config) {
            Some(ItemUpdate { item_id, patch }) => self.layout.update_item(item_id, patch),
            None => false,
        }
    }
}

/// Numeric input fields for the grid configuration
pub struct ConfigInputs {
    pub columns: Entity<InputState>,
    pub rows: Entity<InputState>,
    pub gap: Entity<InputState>,
}

impl ConfigInputs {
    pub fn get(&self, field: ConfigField) -> &Entity<InputState> {
        match field {
            ConfigField::Columns => &self.columns,
            ConfigField::Rows => &self.rows,
            ConfigField::Gap => &self.gap,
        }
    }
}

/// UI state - modal acknowledgments
#[derive(Default)]
pub struct UiState {
    /// Acknowledgment awaiting dismissal; blocks canvas input while shown
    pub acknowledgment: Option<Acknowledgment>,
}

/// Main application state - composed of focused sub-structs
pub struct GridEditor {
    /// Canvas and interaction state
    pub canvas: CanvasState,
    /// Configuration input fields
    pub inputs: ConfigInputs,
    /// UI state
    pub ui: UiState,
    /// Keeps the input field subscriptions alive
    pub(super) _subscriptions: Vec<Subscription>,
}

impl GridEditor {
    /// Returns true while a modal acknowledgment blocks canvas input
    pub fn is_blocked(&self) -> bool {
        self.ui.acknowledgment.is_some()
    }
}
