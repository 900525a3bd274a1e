//! Unit tests for pixel/cell conversion.

use crate::helpers::{CELL, ORIGIN, at_cells, test_space};
use gridsmith::input::coords::{clamp_span, clamp_to_grid};
use gridsmith::input::{CoordinateSpace, PointerPosition};
use gridsmith::types::{GridConfig, GridItem};

#[test]
fn test_space_divides_bounds_by_track_counts() {
    let config = GridConfig::new(4, 2, 0);
    let space = CoordinateSpace::new(10.0, 20.0, 400.0, 300.0, &config).unwrap();

    assert_eq!(space.origin_x, 10.0);
    assert_eq!(space.origin_y, 20.0);
    assert_eq!(space.cell_width, 100.0);
    assert_eq!(space.cell_height, 150.0);
}

#[test]
fn test_space_rejects_non_positive_tracks() {
    assert!(CoordinateSpace::new(0.0, 0.0, 300.0, 300.0, &GridConfig::new(0, 3, 4)).is_none());
    assert!(CoordinateSpace::new(0.0, 0.0, 300.0, 300.0, &GridConfig::new(3, -1, 4)).is_none());
}

#[test]
fn test_space_rejects_empty_bounds() {
    let config = GridConfig::default();
    assert!(CoordinateSpace::new(0.0, 0.0, 0.0, 300.0, &config).is_none());
    assert!(CoordinateSpace::new(0.0, 0.0, 300.0, -5.0, &config).is_none());
}

#[test]
fn test_pointer_to_cell_rounds_to_nearest() {
    let space = test_space(&GridConfig::new(3, 3, 0));

    assert_eq!(space.pointer_to_cell(at_cells(1.0, 1.0)), (1, 1));
    assert_eq!(space.pointer_to_cell(at_cells(1.4, 2.6)), (1, 3));
    assert_eq!(space.pointer_to_cell(at_cells(1.5, 0.5)), (2, 1));
}

#[test]
fn test_pointer_to_cell_subtracts_origin() {
    let space = test_space(&GridConfig::new(3, 3, 0));
    let pointer = PointerPosition::new(ORIGIN.0, ORIGIN.1);

    assert_eq!(space.pointer_to_cell(pointer), (0, 0));
}

#[test]
fn test_delta_to_cells() {
    let space = test_space(&GridConfig::new(5, 5, 0));
    let from = at_cells(1.0, 1.0);

    assert_eq!(space.delta_to_cells(from, at_cells(3.2, 1.0)), (2, 0));
    assert_eq!(space.delta_to_cells(from, at_cells(0.3, 1.6)), (-1, 1));
    assert_eq!(space.delta_to_cells(from, from), (0, 0));
}

#[test]
fn test_clamp_to_grid_upper_and_lower() {
    let config = GridConfig::new(3, 2, 0);

    assert_eq!(clamp_to_grid((5, 1), &config), (3, 1));
    assert_eq!(clamp_to_grid((0, 9), &config), (1, 2));
    assert_eq!(clamp_to_grid((-4, -1), &config), (1, 1));
    assert_eq!(clamp_to_grid((2, 2), &config), (2, 2));
}

#[test]
fn test_clamp_to_grid_with_non_positive_count() {
    let config = GridConfig::new(0, -3, 0);

    assert_eq!(clamp_to_grid((4, 4), &config), (1, 1));
}

#[test]
fn test_clamp_span_to_far_edge() {
    assert_eq!(clamp_span(5, 3, 4), 2);
    assert_eq!(clamp_span(2, 3, 4), 2);
    assert_eq!(clamp_span(1, 4, 4), 1);
    assert_eq!(clamp_span(-2, 1, 4), 1);
}

#[test]
fn test_cell_rect_without_inset() {
    let space = CoordinateSpace::new(0.0, 0.0, 300.0, 200.0, &GridConfig::new(3, 2, 0)).unwrap();
    let item = GridItem { id: 1, x: 2, y: 1, w: 2, h: 2 };
    let rect = space.cell_rect(&item, 0.0);

    assert_eq!(rect.left, CELL);
    assert_eq!(rect.top, 0.0);
    assert_eq!(rect.width, 2.0 * CELL);
    assert_eq!(rect.height, 2.0 * CELL);
}

#[test]
fn test_cell_rect_with_inset() {
    let space = CoordinateSpace::new(0.0, 0.0, 300.0, 300.0, &GridConfig::new(3, 3, 4)).unwrap();
    let rect = space.cell_rect(&GridItem::new(1), 8.0);

    assert_eq!(rect.left, 8.0);
    assert_eq!(rect.top, 8.0);
    assert_eq!(rect.width, 84.0);
    assert_eq!(rect.height, 84.0);
}
