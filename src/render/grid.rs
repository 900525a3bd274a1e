//! Grid area rendering - cell guides, bounds measurement, and placed items.
//!
//! The grid is drawn at a fixed pixel size. A `canvas` element covering the
//! area records its window-space bounds at prepaint so pointer handlers can
//! build a coordinate space, and paints the faint cell guides.
//!
//! Non-positive column or row counts are drawn as a single track; the model
//! keeps the entered values untouched.

use crate::app::{GridEditor, SharedBounds};
use crate::constants::{GRID_CANVAS_HEIGHT, GRID_CANVAS_WIDTH, MAX_GUIDE_CELLS, SPACING_UNIT_PX};
use crate::input::CoordinateSpace;
use crate::layout::GridLayout;
use crate::profile_scope;
use crate::types::{GridConfig, ItemId};
use gpui::*;
use gpui_component::ActiveTheme as _;

use super::item::render_grid_item;

/// Half the configured gap in pixels, applied around every cell
pub fn gap_inset(config: &GridConfig) -> f32 {
    config.gap.max(0) as f32 * SPACING_UNIT_PX / 2.0
}

/// Render the grid container with its items
pub fn render_grid_area(
    layout: &GridLayout,
    active_item: Option<ItemId>,
    grid_bounds: SharedBounds,
    cx: &Context<GridEditor>,
) -> Div {
    profile_scope!("render_grid_area");

    let config = layout.config();
    let display = GridConfig::new(config.columns.max(1), config.rows.max(1), config.gap);
    let inset = gap_inset(config);

    let muted = cx.theme().muted;
    let guide_color = cx.theme().border.opacity(0.6);

    let items: Vec<Div> = CoordinateSpace::new(0.0, 0.0, GRID_CANVAS_WIDTH, GRID_CANVAS_HEIGHT, &display)
        .map(|space| {
            layout
                .items()
                .iter()
                .map(|item| {
                    let rect = space.cell_rect(item, inset);
                    render_grid_item(
                        item,
                        rect,
                        active_item == Some(item.id),
                        item.fits_within(config),
                        cx,
                    )
                })
                .collect()
        })
        .unwrap_or_default();

    div()
        .relative()
        .w(px(GRID_CANVAS_WIDTH))
        .h(px(GRID_CANVAS_HEIGHT))
        .bg(muted)
        .rounded(px(4.0))
        .overflow_hidden()
        .child(
            canvas(
                move |bounds, _window, _cx| {
                    *grid_bounds.borrow_mut() = Some(bounds);
                },
                move |bounds, _, window, _cx| {
                    paint_cell_guides(bounds, &display, inset, guide_color, window);
                },
            )
            .absolute()
            .size_full(),
        )
        .children(items)
}

/// Paint one outlined rectangle per cell
fn paint_cell_guides(
    bounds: Bounds<Pixels>,
    display: &GridConfig,
    inset: f32,
    color: Hsla,
    window: &mut Window,
) {
    let columns = display.columns as usize;
    let rows = display.rows as usize;
    if columns.saturating_mul(rows) > MAX_GUIDE_CELLS {
        return;
    }

    let cell_width = f32::from(bounds.size.width) / columns as f32;
    let cell_height = f32::from(bounds.size.height) / rows as f32;
    let width = (cell_width - inset * 2.0).max(0.0);
    let height = (cell_height - inset * 2.0).max(0.0);

    for row in 0..rows {
        for column in 0..columns {
            let cell_bounds = Bounds {
                origin: point(
                    bounds.origin.x + px(column as f32 * cell_width + inset),
                    bounds.origin.y + px(row as f32 * cell_height + inset),
                ),
                size: size(px(width), px(height)),
            };
            window.paint_quad(quad(
                cell_bounds,
                px(4.0),
                transparent_black(),
                px(1.0),
                color,
                Default::default(),
            ));
        }
    }
}
