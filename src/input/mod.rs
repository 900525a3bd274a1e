//! Pointer input handling for the grid canvas.
//!
//! This module implements the move and resize interactions on grid items.
//!
//! ## Architecture
//!
//! The interaction is an explicit state machine (`InputState`) with a
//! `begin` / `on_move` / `end` interface. Pointer coordinates are converted
//! through a `CoordinateSpace` value captured at interaction start, so the
//! state machine itself never touches the render tree.
//!
//! ## Modules
//!
//! - `coords` - Pixel/cell conversion and clamping
//! - `state` - Input state machine
//! - `throttle` - Optional rate limit for pointer moves
//! - `mouse_down` - Pointer down on items (drag/resize start)
//! - `drag` - Pointer move (apply drag/resize updates)
//! - `mouse_up` - Pointer up (finish interaction)

pub mod coords;
mod drag;
mod mouse_down;
mod mouse_up;
mod state;
mod throttle;

pub use coords::{CellRect, CoordinateSpace, PointerPosition};
pub use state::{InputState, ItemUpdate, PointerTarget};
pub use throttle::MoveThrottle;
