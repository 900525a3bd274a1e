//! Modal overlays.

mod acknowledgment;
mod modal_base;

pub use acknowledgment::render_acknowledgment;
