//! Core types for the grid editor.
//!
//! This module defines the grid configuration, the placed items, and the
//! partial updates applied to them by drag and resize interactions.

use crate::constants::{DEFAULT_COLUMNS, DEFAULT_GAP, DEFAULT_ROWS};

/// Unique identifier of a placed item
pub type ItemId = u64;

// ============================================================================
// Grid Configuration
// ============================================================================

/// Column count, row count, and gap governing the grid.
///
/// Values are stored as entered. Zero or negative counts are representable;
/// consumers that divide by a count must check [`GridConfig::has_tracks`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub columns: i32,
    pub rows: i32,
    pub gap: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            gap: DEFAULT_GAP,
        }
    }
}

impl GridConfig {
    pub fn new(columns: i32, rows: i32, gap: i32) -> Self {
        Self { columns, rows, gap }
    }

    /// Returns true if both track counts are positive
    pub fn has_tracks(&self) -> bool {
        self.columns > 0 && self.rows > 0
    }

    /// Read one field
    pub fn get(&self, field: ConfigField) -> i32 {
        match field {
            ConfigField::Columns => self.columns,
            ConfigField::Rows => self.rows,
            ConfigField::Gap => self.gap,
        }
    }

    /// Overwrite one field
    pub fn set(&mut self, field: ConfigField, value: i32) {
        match field {
            ConfigField::Columns => self.columns = value,
            ConfigField::Rows => self.rows = value,
            ConfigField::Gap => self.gap = value,
        }
    }
}

/// One of the live numeric fields of the configuration panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigField {
    Columns,
    Rows,
    Gap,
}

impl ConfigField {
    pub const ALL: [ConfigField; 3] = [ConfigField::Columns, ConfigField::Rows, ConfigField::Gap];

    /// Label shown above the input field
    pub fn label(&self) -> &'static str {
        match self {
            ConfigField::Columns => "Columns",
            ConfigField::Rows => "Rows",
            ConfigField::Gap => "Gap",
        }
    }
}

/// Parse the text of a numeric field.
///
/// Surrounding whitespace is ignored. Returns `None` for empty or
/// non-integer text so the caller can keep the previous value.
pub fn parse_config_value(text: &str) -> Option<i32> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i32>().ok()
}

// ============================================================================
// Grid Items
// ============================================================================

/// A placed rectangle: 1-indexed origin cell plus a column/row span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridItem {
    pub id: ItemId,
    /// Starting column (1-indexed)
    pub x: i32,
    /// Starting row (1-indexed)
    pub y: i32,
    /// Column span
    pub w: i32,
    /// Row span
    pub h: i32,
}

impl GridItem {
    /// Create an item with the default placement `(1, 1, 1, 1)`
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            x: 1,
            y: 1,
            w: 1,
            h: 1,
        }
    }

    /// Apply the fields present in `patch`, leaving the rest untouched
    pub fn apply(&mut self, patch: &ItemPatch) {
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(w) = patch.w {
            self.w = w;
        }
        if let Some(h) = patch.h {
            self.h = h;
        }
    }

    /// Returns true if the item lies entirely inside the grid
    pub fn fits_within(&self, config: &GridConfig) -> bool {
        self.x >= 1
            && self.y >= 1
            && self.w >= 1
            && self.h >= 1
            && i64::from(self.x) + i64::from(self.w) - 1 <= i64::from(config.columns)
            && i64::from(self.y) + i64::from(self.h) - 1 <= i64::from(config.rows)
    }

    /// Text shown inside the item on the canvas
    pub fn label(&self) -> String {
        format!("{},{} - {}x{}", self.x, self.y, self.w, self.h)
    }
}

/// Partial update of a [`GridItem`]; only `Some` fields are applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub w: Option<i32>,
    pub h: Option<i32>,
}

impl ItemPatch {
    /// Patch that moves the origin cell
    pub fn position(x: i32, y: i32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Patch that changes the span
    pub fn size(w: i32, h: i32) -> Self {
        Self {
            w: Some(w),
            h: Some(h),
            ..Self::default()
        }
    }

    pub fn with_x(mut self, x: i32) -> Self {
        self.x = Some(x);
        self
    }

    pub fn with_y(mut self, y: i32) -> Self {
        self.y = Some(y);
        self
    }

    pub fn with_w(mut self, w: i32) -> Self {
        self.w = Some(w);
        self
    }

    pub fn with_h(mut self, h: i32) -> Self {
        self.h = Some(h);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.w.is_none() && self.h.is_none()
    }
}
