//! Gridsmith - a visual grid layout editor.
//!
//! Items are placed on a column/row grid by dragging and resizing, and the
//! layout is emitted as utility-class markup.
//!
//! The model (`types`, `layout`, `markup`) and the interaction state machine
//! (`input`) are independent of any window; `app` and `render` bind them to
//! GPUI.

pub mod acknowledgment;
pub mod app;
pub mod constants;
pub mod error;
pub mod input;
pub mod layout;
pub mod markup;
pub mod perf;
pub mod render;
pub mod settings;
pub mod types;
