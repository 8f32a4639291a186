//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Width of one poster card in columns (border included).
pub const CARD_WIDTH: u16 = 24;

/// Gap between adjacent cards in columns.
pub const CARD_GAP: u16 = 2;

/// Horizontal stride from one card's left edge to the next.
pub const CARD_STRIDE: u16 = CARD_WIDTH + CARD_GAP;

/// Height of one poster card in rows (border included).
pub const CARD_HEIGHT: u16 = 8;

/// Rows consumed by one shelf: title line + cards + spacing line.
pub const SHELF_HEIGHT: u16 = CARD_HEIGHT + 2;

/// Width of one profile icon card in columns.
pub const ICON_WIDTH: u16 = 14;

/// Gap between adjacent icon cards in columns.
pub const ICON_GAP: u16 = 2;

/// Horizontal stride from one icon's left edge to the next.
pub const ICON_STRIDE: u16 = ICON_WIDTH + ICON_GAP;

/// Height of one profile icon card in rows.
pub const ICON_HEIGHT: u16 = 7;

/// Height of the header bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the profile picker's pinned header in lines.
pub const PICKER_HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Pointer travel (in columns) below which a released drag counts as a
/// click. Terminal cells are coarse, so the slop is small; anything that
/// moved a card's worth of columns is clearly a drag.
pub const DRAG_CLICK_THRESHOLD: u16 = 3;

/// Width percentage for the detail modal popup.
pub const DETAIL_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for the detail modal popup.
pub const DETAIL_POPUP_HEIGHT_PERCENT: u16 = 50;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;
