//! Coordinate conversion between screen pixels and grid cells.
//!
//! A [`CoordinateSpace`] is captured from the grid's on-screen bounds when an
//! interaction starts and passed into every conversion, so the arithmetic
//! below needs no rendering surface and can be tested directly.

use crate::types::{GridConfig, GridItem};
use gpui::{Bounds, Pixels, Point};

/// A pointer position in window pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

impl PointerPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Point<Pixels>> for PointerPosition {
    fn from(point: Point<Pixels>) -> Self {
        Self {
            x: f32::from(point.x),
            y: f32::from(point.y),
        }
    }
}

/// Pixel rectangle relative to the grid origin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Mapping between window pixels and grid cells
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateSpace {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl CoordinateSpace {
    /// Build a coordinate space for a grid drawn at the given rectangle.
    ///
    /// Returns `None` when the grid has no positive column or row count or the
    /// rectangle is empty, since no cell size exists then.
    pub fn new(
        origin_x: f32,
        origin_y: f32,
        width: f32,
        height: f32,
        config: &GridConfig,
    ) -> Option<Self> {
        if !config.has_tracks() || width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(Self {
            origin_x,
            origin_y,
            cell_width: width / config.columns as f32,
            cell_height: height / config.rows as f32,
        })
    }

    /// Build a coordinate space from measured element bounds
    pub fn from_bounds(bounds: Bounds<Pixels>, config: &GridConfig) -> Option<Self> {
        Self::new(
            f32::from(bounds.origin.x),
            f32::from(bounds.origin.y),
            f32::from(bounds.size.width),
            f32::from(bounds.size.height),
            config,
        )
    }

    /// Unclamped cell coordinate nearest to an absolute pointer position
    pub fn pointer_to_cell(&self, pos: PointerPosition) -> (i32, i32) {
        (
            round_half_up((pos.x - self.origin_x) / self.cell_width),
            round_half_up((pos.y - self.origin_y) / self.cell_height),
        )
    }

    /// Whole-cell displacement between two pointer positions
    pub fn delta_to_cells(&self, from: PointerPosition, to: PointerPosition) -> (i32, i32) {
        (
            round_half_up((to.x - from.x) / self.cell_width),
            round_half_up((to.y - from.y) / self.cell_height),
        )
    }

    /// Pixel rectangle an item occupies, shrunk by `inset` on every side
    pub fn cell_rect(&self, item: &GridItem, inset: f32) -> CellRect {
        let width = item.w as f32 * self.cell_width - inset * 2.0;
        let height = item.h as f32 * self.cell_height - inset * 2.0;
        CellRect {
            left: (item.x - 1) as f32 * self.cell_width + inset,
            top: (item.y - 1) as f32 * self.cell_height + inset,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

/// Round to the nearest integer; ties round toward positive infinity.
pub fn round_half_up(value: f32) -> i32 {
    (value + 0.5).floor() as i32
}

/// Clamp a raw cell coordinate into `[1, columns] x [1, rows]`.
///
/// The lower bound wins when a count is below 1.
pub fn clamp_to_grid(cell: (i32, i32), config: &GridConfig) -> (i32, i32) {
    (
        cell.0.min(config.columns).max(1),
        cell.1.min(config.rows).max(1),
    )
}

/// Clamp a span so an item starting at `start` stays within `count` tracks.
///
/// The result is at least 1 even when the origin already lies past the edge.
pub fn clamp_span(span: i32, start: i32, count: i32) -> i32 {
    span.min(count.saturating_sub(start).saturating_add(1)).max(1)
}
