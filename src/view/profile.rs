//! Profile icon picker page.
//!
//! Pinned header over a vertically scrollable body holding the icon rail.
//! The header is restyled once the body has scrolled off the top, the
//! terminal cousin of the original's scroll-position-driven header
//! background.

use crate::model::Library;
use crate::state::profile::IconStore;
use crate::state::{PickerState, SessionIconStore};
use crate::view::constants::{ICON_HEIGHT, ICON_STRIDE, ICON_WIDTH};
use crate::view::layout::PickerLayout;
use crate::view::rail::truncate_to_width;
use crate::view::styles::Theme;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the profile picker page (header, section, icon rail).
pub fn render_picker(
    frame: &mut Frame,
    library: &Library,
    picker: &PickerState,
    icon_store: &SessionIconStore,
    profile_name: &str,
    layout: &PickerLayout,
    theme: &Theme,
) {
    let header_style = if picker.is_scrolled() {
        theme.header_scrolled
    } else {
        theme.header
    };
    let header_lines = vec![
        Line::raw(format!("← esc   Edit Profile{:>width$}", profile_name, width = 20)),
        Line::raw("Choose a profile icon."),
        Line::raw(""),
    ];
    frame.render_widget(
        Paragraph::new(header_lines).style(header_style),
        layout.header,
    );

    if let Some(section_title) = layout.section_title {
        frame.render_widget(
            Paragraph::new("The Classics").style(theme.shelf_title_focused),
            section_title,
        );
    }

    if let Some(strip) = layout.icon_strip {
        if library.icons().is_empty() {
            frame.render_widget(
                Paragraph::new("Failed to load profiles").style(theme.error),
                strip,
            );
        } else {
            render_icon_strip(frame, library, picker, icon_store, strip, theme);
        }
    }
}

fn render_icon_strip(
    frame: &mut Frame,
    library: &Library,
    picker: &PickerState,
    icon_store: &SessionIconStore,
    strip: Rect,
    theme: &Theme,
) {
    let render_offset = picker
        .rail
        .viewport
        .as_ref()
        .map_or(0, |viewport| viewport.render_offset());

    for (index, icon) in library.icons().iter().enumerate() {
        let virtual_x = (index * usize::from(ICON_STRIDE)) as i64;
        let left = i64::from(strip.x) + virtual_x - render_offset as i64;
        let right = left + i64::from(ICON_WIDTH);

        let visible_left = left.max(i64::from(strip.x));
        let visible_right = right.min(i64::from(strip.x) + i64::from(strip.width));
        if visible_right <= visible_left {
            continue;
        }

        let area = Rect::new(
            visible_left as u16,
            strip.y,
            (visible_right - visible_left) as u16,
            ICON_HEIGHT.min(strip.height),
        );

        let selected = icon_store.selected() == Some(icon.id());
        let style = if selected { theme.selected } else { theme.card };

        let inner_width = usize::from(ICON_WIDTH.saturating_sub(2));
        let art_row = "●".repeat(inner_width);
        let label = if selected {
            format!("✓ {}", icon.title())
        } else {
            icon.title().to_string()
        };

        let mut lines = Vec::with_capacity(usize::from(ICON_HEIGHT) - 2);
        for _ in 0..ICON_HEIGHT.saturating_sub(3) {
            lines.push(Line::styled(art_row.clone(), theme.card_art));
        }
        lines.push(Line::styled(truncate_to_width(&label, inner_width), style));

        frame.render_widget(
            Paragraph::new(lines)
                .style(style)
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
    }
}
