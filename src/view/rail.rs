//! Shelf rail widget.
//!
//! Renders one shelf: the title line and a horizontally scrolled strip of
//! poster cards, offset by the rail viewport's drawn position. Cards that
//! straddle the strip edges are clipped to the strip, which is what makes
//! a drag feel like sliding a physical strip of posters.

use crate::model::Shelf;
use crate::state::RailState;
use crate::view::constants::{CARD_HEIGHT, CARD_STRIDE, CARD_WIDTH};
use crate::view::layout::ShelfLayout;
use crate::view::styles::Theme;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Render one shelf row (title + card strip + chevrons).
pub fn render_shelf(
    frame: &mut Frame,
    shelf: &Shelf,
    rail: &RailState,
    layout: &ShelfLayout,
    focused: bool,
    theme: &Theme,
) {
    let title_style = if focused {
        theme.shelf_title_focused
    } else {
        theme.shelf_title
    };
    let title = format!("{} ({})", shelf.title(), shelf.len());
    frame.render_widget(
        Paragraph::new(title).style(title_style),
        layout.title_area,
    );

    let strip = layout.strip_area;
    if strip.width == 0 || strip.height == 0 {
        return;
    }

    if shelf.is_empty() {
        frame.render_widget(
            Paragraph::new("(no titles)").style(theme.shelf_title),
            strip,
        );
        return;
    }

    let render_offset = rail
        .viewport
        .as_ref()
        .map_or(0, |viewport| viewport.render_offset());

    for (index, show) in shelf.shows().iter().enumerate() {
        let virtual_x = (index * usize::from(CARD_STRIDE)) as i64;
        let left = i64::from(strip.x) + virtual_x - render_offset as i64;
        let right = left + i64::from(CARD_WIDTH);

        let visible_left = left.max(i64::from(strip.x));
        let visible_right = right.min(i64::from(strip.x) + i64::from(strip.width));
        if visible_right <= visible_left {
            continue;
        }

        let card_area = Rect::new(
            visible_left as u16,
            strip.y,
            (visible_right - visible_left) as u16,
            CARD_HEIGHT.min(strip.height),
        );

        let inner_width = usize::from(CARD_WIDTH.saturating_sub(2));
        let art_row = "▒".repeat(inner_width);
        let year = show
            .year()
            .map_or_else(String::new, |year| format!("({year})"));

        let mut lines = Vec::with_capacity(usize::from(CARD_HEIGHT) - 2);
        for _ in 0..CARD_HEIGHT.saturating_sub(4) {
            lines.push(Line::styled(art_row.clone(), theme.card_art));
        }
        lines.push(Line::styled(
            truncate_to_width(show.title(), inner_width),
            theme.card,
        ));
        lines.push(Line::styled(year, theme.shelf_title));

        frame.render_widget(
            Paragraph::new(lines)
                .style(theme.card)
                .block(Block::default().borders(Borders::ALL)),
            card_area,
        );
    }

    render_chevrons(frame, rail, strip, theme);
}

/// Directional indicators at the strip edges.
///
/// The right chevron is always drawn; the left one appears only once the
/// rail has been interacted with (the controller's sticky flag).
fn render_chevrons(frame: &mut Frame, rail: &RailState, strip: Rect, theme: &Theme) {
    let mid_y = strip.y + strip.height / 2;

    if rail.controller.is_scrollable() {
        frame.render_widget(
            Paragraph::new("‹").style(theme.chevron),
            Rect::new(strip.x, mid_y, 1, 1),
        );
    }

    frame.render_widget(
        Paragraph::new("›").style(theme.chevron),
        Rect::new(strip.x + strip.width - 1, mid_y, 1, 1),
    );
}

/// Truncate to a display width, appending an ellipsis when cut.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let mut width = 0;
    for (offset, ch) in text.char_indices() {
        width += ch.width().unwrap_or(0);
        if width > max_width {
            // Re-truncate to leave room for the ellipsis.
            let mut out = String::new();
            let mut used = 0;
            for ch in text[..offset].chars() {
                let w = ch.width().unwrap_or(0);
                if used + w > max_width - 1 {
                    break;
                }
                used += w;
                out.push(ch);
            }
            out.push('…');
            return out;
        }
    }
    text.to_string()
}
