//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Grid Defaults
// ============================================================================

/// Default number of grid columns
pub const DEFAULT_COLUMNS: i32 = 3;

/// Default number of grid rows
pub const DEFAULT_ROWS: i32 = 3;

/// Default gap, in utility spacing units
pub const DEFAULT_GAP: i32 = 4;

/// Identifier handed to the first item created in a session
pub const FIRST_ITEM_ID: u64 = 1;

/// Pixels per utility spacing unit (`gap-1` = 0.25rem = 4px)
pub const SPACING_UNIT_PX: f32 = 4.0;

// ============================================================================
// Layout Constants
// ============================================================================

/// Width of the visual grid area in pixels
pub const GRID_CANVAS_WIDTH: f32 = 720.0;

/// Height of the visual grid area in pixels
pub const GRID_CANVAS_HEIGHT: f32 = 420.0;

/// Side length of the resize handle at an item's bottom-right corner
pub const RESIZE_HANDLE_SIZE: f32 = 14.0;

/// Inset of the resize handle and delete button from the item edge
pub const ITEM_CONTROL_INSET: f32 = 4.0;

/// Upper bound on guide cells painted behind the items
pub const MAX_GUIDE_CELLS: usize = 2_500;

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 900.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;

/// Width of the column/row/gap input fields
pub const CONFIG_INPUT_WIDTH: f32 = 120.0;

// ============================================================================
// Modal Constants
// ============================================================================

/// Width of the acknowledgment modal
pub const MODAL_WIDTH_SM: f32 = 360.0;

/// Backdrop opacity behind modals
pub const MODAL_BACKDROP_OPACITY: f32 = 0.6;

// ============================================================================
// Text
// ============================================================================

/// Window and page title
pub const APP_TITLE: &str = "Tailwind CSS Grid Generator";

/// Font used for the generated markup listing
pub const DEFAULT_CODE_FONT: &str = "Menlo";

/// Acknowledgment shown after a successful copy
pub const COPY_SUCCESS_MESSAGE: &str = "HTML copied to clipboard!";

// ============================================================================
// Interaction
// ============================================================================

/// Default minimum interval between applied pointer moves (0 = unthrottled)
pub const DEFAULT_MOVE_THROTTLE_MS: u64 = 0;
