//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestLayoutBuilder` - Builder pattern for creating layouts with placed items
//! - `test_space()` - A coordinate space with round numbers
//! - `test_canvas()` / `press()` - Canvas state for pointer gestures
//! - Assertion helpers

use gridsmith::app::CanvasState;
use gridsmith::input::{CoordinateSpace, MoveThrottle, PointerPosition, PointerTarget};
use gridsmith::layout::GridLayout;
use gridsmith::types::{GridConfig, ItemId, ItemPatch};
use std::time::Duration;

/// Grid origin used by `test_space`
pub const ORIGIN: (f32, f32) = (50.0, 40.0);

/// Cell edge length used by `test_space`
pub const CELL: f32 = 100.0;

// ============================================================================
// TestLayoutBuilder - Builder pattern for creating test layouts
// ============================================================================

/// Builder for creating layouts with configuration and placed items.
///
/// # Example
/// ```ignore
/// let layout = TestLayoutBuilder::new()
///     .with_config(4, 3, 2)
///     .with_item_at(2, 1, 2, 1)
///     .build();
/// ```
pub struct TestLayoutBuilder {
    config: GridConfig,
    items: Vec<(i32, i32, i32, i32)>,
}

impl Default for TestLayoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestLayoutBuilder {
    pub fn new() -> Self {
        Self {
            config: GridConfig::default(),
            items: Vec::new(),
        }
    }

    /// Set columns, rows, and gap.
    pub fn with_config(mut self, columns: i32, rows: i32, gap: i32) -> Self {
        self.config = GridConfig::new(columns, rows, gap);
        self
    }

    /// Add an item with the default placement.
    pub fn with_item(mut self) -> Self {
        self.items.push((1, 1, 1, 1));
        self
    }

    /// Add N items with the default placement.
    pub fn with_n_items(mut self, count: usize) -> Self {
        for _ in 0..count {
            self.items.push((1, 1, 1, 1));
        }
        self
    }

    /// Add an item at an explicit origin and span.
    pub fn with_item_at(mut self, x: i32, y: i32, w: i32, h: i32) -> Self {
        self.items.push((x, y, w, h));
        self
    }

    /// Build the layout; items receive ids 1, 2, 3, ... in insertion order.
    pub fn build(self) -> GridLayout {
        let mut layout = GridLayout::new(self.config);
        for (x, y, w, h) in self.items {
            let id = layout.add_item();
            layout.update_item(
                id,
                ItemPatch::default().with_x(x).with_y(y).with_w(w).with_h(h),
            );
        }
        layout
    }
}

// ============================================================================
// Standalone helper functions
// ============================================================================

/// Coordinate space with 100px cells whose grid starts at `ORIGIN`.
pub fn test_space(config: &GridConfig) -> CoordinateSpace {
    CoordinateSpace::new(
        ORIGIN.0,
        ORIGIN.1,
        CELL * config.columns as f32,
        CELL * config.rows as f32,
        config,
    )
    .expect("test grids have positive tracks")
}

/// Pointer position at fractional cell coordinates within `test_space`.
pub fn at_cells(cx: f32, cy: f32) -> PointerPosition {
    PointerPosition::new(ORIGIN.0 + cx * CELL, ORIGIN.1 + cy * CELL)
}

/// Assert that a layout contains exactly `expected` items.
pub fn assert_item_count(layout: &GridLayout, expected: usize) {
    assert_eq!(
        layout.len(),
        expected,
        "Expected {} items, found {}",
        expected,
        layout.len()
    );
}

/// Number of child tags in generated markup
pub fn child_tag_count(markup: &str) -> usize {
    markup.matches("<div class=\"col-start-").count()
}

/// Canvas state over `layout` with the given throttle interval.
pub fn test_canvas(layout: GridLayout, throttle_ms: u64) -> CanvasState {
    CanvasState::new(layout, MoveThrottle::new(Duration::from_millis(throttle_ms)))
}

/// Press on an item of `canvas`, using `test_space` for its grid.
pub fn press(canvas: &mut CanvasState, item_id: ItemId, target: PointerTarget, at: PointerPosition) {
    let item = *canvas.layout.get_item(item_id).expect("item exists");
    let space = test_space(canvas.layout.config());
    canvas.input_state.begin(target, &item, space, at);
}
