//! Detail modal overlay.
//!
//! Centered popup presenting the activated show, with the autoplay flag
//! the host toggles from the modal.

use crate::model::Show;
use crate::view::constants::{DETAIL_POPUP_HEIGHT_PERCENT, DETAIL_POPUP_WIDTH_PERCENT};
use crate::view::layout::centered_rect;
use crate::view::styles::Theme;
use ratatui::{
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the detail modal over the browse page.
pub fn render_detail_modal(frame: &mut Frame, show: &Show, autoplay: bool, theme: &Theme) {
    let area = centered_rect(
        DETAIL_POPUP_WIDTH_PERCENT,
        DETAIL_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    let heading = match show.year() {
        Some(year) => format!("{} ({year})", show.title()),
        None => show.title().to_string(),
    };

    let playback = if autoplay {
        "▶ autoplay on"
    } else {
        "⏸ autoplay off"
    };

    let mut lines = vec![
        Line::styled(heading, theme.header),
        Line::raw(""),
    ];
    if let Some(overview) = show.overview() {
        lines.push(Line::styled(overview.to_string(), theme.overlay));
        lines.push(Line::raw(""));
    }
    if let Some(artwork) = show.artwork() {
        lines.push(Line::styled(format!("art: {artwork}"), theme.status));
    }
    lines.push(Line::styled(playback.to_string(), theme.selected));
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "enter toggle autoplay · esc close",
        theme.status,
    ));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .style(theme.overlay)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" details ")),
        area,
    );
}
