//! Application module - the GridEditor view state and its operations.
//!
//! This module is organized into several submodules:
//! - `state` - The GridEditor struct definition and sub-structs
//! - `lifecycle` - Initialization
//! - `grid_management` - Item add/update/remove and configuration edits
//! - `export` - Clipboard export and acknowledgments
//!
//! Pointer handlers live in `crate::input`, rendering in `crate::render`.

mod export;
mod grid_management;
mod lifecycle;
mod state;

pub use export::verify_clipboard;
pub use state::{CanvasState, ConfigInputs, GridEditor, SharedBounds, UiState};
