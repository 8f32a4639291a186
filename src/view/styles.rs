//! Theme and color configuration.
//!
//! Provides the style palette for chrome, shelves, and cards, plus the
//! color kill-switch driven by `--no-color` / `NO_COLOR`.

use ratatui::style::{Color, Modifier, Style};

/// Names accepted by `--theme`, the config file, and `RAILVIEW_THEME`.
pub const THEME_NAMES: &[&str] = &["dark", "dim", "light"];

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Theme =====

/// Style palette for the whole UI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Top header bar.
    pub header: Style,
    /// Picker header once the page has scrolled off the top.
    pub header_scrolled: Style,
    /// Shelf title line.
    pub shelf_title: Style,
    /// Shelf title line of the focused shelf.
    pub shelf_title_focused: Style,
    /// Card borders and text.
    pub card: Style,
    /// Artwork placeholder fill inside cards.
    pub card_art: Style,
    /// Directional chevron indicators at the strip edges.
    pub chevron: Style,
    /// Status bar.
    pub status: Style,
    /// Error annotations (malformed catalog lines).
    pub error: Style,
    /// Overlay surfaces (modal, help).
    pub overlay: Style,
    /// Selection highlight (picked icon).
    pub selected: Style,
}

impl Theme {
    /// Resolve a theme by name, falling back to `dark` for unknown names.
    ///
    /// With colors disabled every style is the terminal default, keeping
    /// the layout intact without emitting color escapes.
    pub fn named(name: &str, colors: ColorConfig) -> Self {
        if !colors.colors_enabled() {
            return Self::plain();
        }
        match name {
            "dim" => Self::dim(),
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    fn plain() -> Self {
        let none = Style::default();
        Self {
            header: none.add_modifier(Modifier::BOLD),
            header_scrolled: none.add_modifier(Modifier::REVERSED),
            shelf_title: none,
            shelf_title_focused: none.add_modifier(Modifier::BOLD),
            card: none,
            card_art: none,
            chevron: none.add_modifier(Modifier::BOLD),
            status: none,
            error: none.add_modifier(Modifier::BOLD),
            overlay: none,
            selected: none.add_modifier(Modifier::REVERSED),
        }
    }

    fn dark() -> Self {
        Self {
            header: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            header_scrolled: Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
            shelf_title: Style::default().fg(Color::Gray),
            shelf_title_focused: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            card: Style::default().fg(Color::White),
            card_art: Style::default().fg(Color::DarkGray),
            chevron: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            status: Style::default().fg(Color::Gray),
            error: Style::default().fg(Color::Red),
            overlay: Style::default().fg(Color::White),
            selected: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        }
    }

    fn dim() -> Self {
        Self {
            header: Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            header_scrolled: Style::default().fg(Color::Black).bg(Color::Gray),
            shelf_title: Style::default().fg(Color::DarkGray),
            shelf_title_focused: Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            card: Style::default().fg(Color::Gray),
            card_art: Style::default().fg(Color::DarkGray),
            chevron: Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            status: Style::default().fg(Color::DarkGray),
            error: Style::default().fg(Color::LightRed),
            overlay: Style::default().fg(Color::Gray),
            selected: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        }
    }

    fn light() -> Self {
        Self {
            header: Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
            header_scrolled: Style::default()
                .fg(Color::White)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
            shelf_title: Style::default().fg(Color::DarkGray),
            shelf_title_focused: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            card: Style::default().fg(Color::Black),
            card_art: Style::default().fg(Color::Gray),
            chevron: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            status: Style::default().fg(Color::DarkGray),
            error: Style::default().fg(Color::Red),
            overlay: Style::default().fg(Color::Black),
            selected: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        }
    }
}
