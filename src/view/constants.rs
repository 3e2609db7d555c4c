//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the header line.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of each input box (border + content + description line + border).
pub const INPUT_ROW_HEIGHT: u16 = 4;

/// Height of the status message line under the inputs.
pub const MESSAGE_HEIGHT: u16 = 1;

/// Height of the calculation steps panel (border + counter + message + hints + border).
pub const STEPS_PANEL_HEIGHT: u16 = 5;

/// Height of the status bar in lines.
///
/// Single line for the AUTO badge and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Maximum number of array cells drawn per row.
pub const ARRAY_ITEMS_PER_ROW: usize = 10;

/// Lines per array row: index above value.
pub const ARRAY_ROW_HEIGHT: u16 = 2;

/// Blank lines between array rows.
pub const ARRAY_ROW_GAP: u16 = 1;

/// Blank columns between adjacent cells.
pub const ARRAY_CELL_GAP: u16 = 1;

/// Width percentage for help overlay popup.
///
/// Percentage of screen width (0-100) for the help overlay modal.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
///
/// Percentage of screen height (0-100) for the help overlay modal.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Upper bound on how long the event loop blocks waiting for input.
pub const EVENT_POLL_INTERVAL_MS: u64 = 250;
