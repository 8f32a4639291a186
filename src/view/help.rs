//! Key-binding help overlay.

use crate::view::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use crate::view::layout::centered_rect;
use crate::view::styles::Theme;
use ratatui::{
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the help overlay listing the default key bindings.
pub fn render_help_overlay(frame: &mut Frame, theme: &Theme) {
    let area = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    let entries: &[(&str, &str)] = &[
        ("h / ←", "scroll rail left (wraps at the edge)"),
        ("l / →", "scroll rail right"),
        ("k / ↑", "previous shelf / scroll picker up"),
        ("j / ↓", "next shelf / scroll picker down"),
        ("enter / space", "open details / pick icon"),
        ("p", "profile icon picker"),
        ("esc", "close modal, picker or help"),
        ("?", "toggle this help"),
        ("q / ctrl+c", "quit"),
        ("", ""),
        ("mouse drag", "pull a rail sideways"),
        ("mouse click", "open the card under the pointer"),
        ("wheel ←/→", "scroll the rail under the pointer"),
    ];

    let mut lines = Vec::with_capacity(entries.len());
    for (keys, what) in entries {
        if keys.is_empty() {
            lines.push(Line::raw(""));
        } else {
            lines.push(Line::styled(format!("{keys:>14}  {what}"), theme.overlay));
        }
    }

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .style(theme.overlay)
            .block(Block::default().borders(Borders::ALL).title(" keys ")),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn overlay_lists_core_bindings() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let theme = Theme::named("dark", ColorConfig::from_env_and_args(true));

        terminal
            .draw(|frame| render_help_overlay(frame, &theme))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let area = buffer.area();
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }

        assert!(text.contains("scroll rail left"));
        assert!(text.contains("profile icon picker"));
        assert!(text.contains("quit"));
    }
}
