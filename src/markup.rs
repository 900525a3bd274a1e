//! Markup generation.
//!
//! Projects the grid configuration and item list into a container element
//! carrying `grid-cols-*`, `grid-rows-*`, and `gap-*` utility classes, with
//! one child element per item carrying its column/row start and span.
//!
//! The output is a pure function of its inputs: identical state always yields
//! identical text, and there is exactly one child tag per item whether or not
//! the item currently fits inside the grid.

use crate::types::{GridConfig, GridItem};
use std::fmt::Write as _;

/// Indentation applied to child tags
const CHILD_INDENT: &str = "  ";

/// Class list of the container element
pub fn container_classes(config: &GridConfig) -> String {
    format!(
        "grid grid-cols-{} grid-rows-{} gap-{}",
        config.columns, config.rows, config.gap
    )
}

/// Class list of one item element
pub fn item_classes(item: &GridItem) -> String {
    format!(
        "col-start-{} col-span-{} row-start-{} row-span-{}",
        item.x, item.w, item.y, item.h
    )
}

/// Render the full markup for a layout.
pub fn render_markup(config: &GridConfig, items: &[GridItem]) -> String {
    let mut out = String::with_capacity(64 + items.len() * 80);

    // Writing into a String cannot fail
    let _ = writeln!(out, "<div class=\"{}\">", container_classes(config));
    for item in items {
        let _ = writeln!(
            out,
            "{}<div class=\"{}\"></div>",
            CHILD_INDENT,
            item_classes(item)
        );
    }
    out.push_str("</div>");
    out
}
