//! Screen geometry.
//!
//! Pure layout math, computed from the terminal area before each draw.
//! The same geometry feeds three consumers: viewport measurement, mouse
//! hit regions, and the renderer - so they can never disagree.

use crate::view::constants::{
    CARD_HEIGHT, HEADER_HEIGHT, ICON_HEIGHT, PICKER_HEADER_HEIGHT, SHELF_HEIGHT, STATUS_BAR_HEIGHT,
};
use ratatui::layout::Rect;

// ===== Browse =====

/// Geometry for one shelf row: title line plus the card strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShelfLayout {
    /// Shelf index into the library.
    pub index: usize,
    /// Single-line title area.
    pub title_area: Rect,
    /// Card strip area below the title.
    pub strip_area: Rect,
}

/// Geometry for the browse page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseLayout {
    /// Header bar.
    pub header: Rect,
    /// Visible shelf rows, starting at `first_visible_shelf`.
    pub shelves: Vec<ShelfLayout>,
    /// Status bar.
    pub status: Rect,
    /// How many shelf rows fit in the content area.
    pub capacity: usize,
}

/// Compute the browse page layout.
///
/// Shelf rows are windowed: up to `capacity` rows starting at
/// `first_visible`, each one title line plus a card strip.
pub fn browse_layout(area: Rect, first_visible: usize, shelf_count: usize) -> BrowseLayout {
    let header = Rect::new(area.x, area.y, area.width, HEADER_HEIGHT.min(area.height));
    let status_y = area.y + area.height.saturating_sub(STATUS_BAR_HEIGHT);
    let status = Rect::new(area.x, status_y, area.width, STATUS_BAR_HEIGHT.min(area.height));

    let content_top = area.y + HEADER_HEIGHT;
    let content_height = area
        .height
        .saturating_sub(HEADER_HEIGHT + STATUS_BAR_HEIGHT);
    let capacity = usize::from(content_height / SHELF_HEIGHT);

    let mut shelves = Vec::new();
    for slot in 0..capacity {
        let index = first_visible + slot;
        if index >= shelf_count {
            break;
        }
        let y = content_top + (slot as u16) * SHELF_HEIGHT;
        shelves.push(ShelfLayout {
            index,
            title_area: Rect::new(area.x + 1, y, area.width.saturating_sub(2), 1),
            strip_area: Rect::new(area.x + 1, y + 1, area.width.saturating_sub(2), CARD_HEIGHT),
        });
    }

    BrowseLayout {
        header,
        shelves,
        status,
        capacity,
    }
}

// ===== Profile picker =====

/// Geometry for the profile picker page.
///
/// The body scrolls vertically behind the pinned header; sections that
/// have scrolled out of view come back as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerLayout {
    /// Pinned page header (restyled once the body scrolls).
    pub header: Rect,
    /// Scrollable body area.
    pub body: Rect,
    /// Status bar.
    pub status: Rect,
    /// "The Classics" section title line, when visible.
    pub section_title: Option<Rect>,
    /// Icon strip, when fully visible.
    pub icon_strip: Option<Rect>,
}

// Virtual rows of the picker body, before vertical scrolling.
const SECTION_TITLE_ROW: u16 = 1;
const ICON_STRIP_ROW: u16 = 3;

/// Compute the picker page layout for a given vertical offset.
pub fn picker_layout(area: Rect, vertical_offset: usize) -> PickerLayout {
    let header = Rect::new(
        area.x,
        area.y,
        area.width,
        PICKER_HEADER_HEIGHT.min(area.height),
    );
    let status_y = area.y + area.height.saturating_sub(STATUS_BAR_HEIGHT);
    let status = Rect::new(area.x, status_y, area.width, STATUS_BAR_HEIGHT.min(area.height));

    let body_top = area.y + PICKER_HEADER_HEIGHT;
    let body_height = area
        .height
        .saturating_sub(PICKER_HEADER_HEIGHT + STATUS_BAR_HEIGHT);
    let body = Rect::new(area.x, body_top, area.width, body_height);

    let offset = u16::try_from(vertical_offset).unwrap_or(u16::MAX);

    let section_title = visible_row(body, SECTION_TITLE_ROW, 1, offset);
    let icon_strip = visible_row(body, ICON_STRIP_ROW, ICON_HEIGHT, offset);

    PickerLayout {
        header,
        body,
        status,
        section_title,
        icon_strip,
    }
}

/// Centered popup rect sized as a percentage of the surrounding area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Screen rect of a virtual body row span, or `None` when scrolled out.
///
/// A span is only reported while it fits entirely inside the body, so
/// consumers never have to handle partially clipped strips.
fn visible_row(body: Rect, virtual_row: u16, height: u16, offset: u16) -> Option<Rect> {
    if virtual_row < offset {
        return None;
    }
    let y = body.y + (virtual_row - offset);
    if y + height > body.y + body.height {
        return None;
    }
    Some(Rect::new(body.x + 1, y, body.width.saturating_sub(2), height))
}
