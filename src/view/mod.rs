//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod detail;
mod help;
pub mod layout;
mod profile;
mod rail;
mod styles;

pub use detail::render_detail_modal;
pub use help::render_help_overlay;
pub use layout::{browse_layout, picker_layout, BrowseLayout, PickerLayout};
pub use profile::render_picker;
pub use rail::render_shelf;
pub use styles::{ColorConfig, Theme, THEME_NAMES};

use crate::config::keybindings::KeyBindings;
use crate::model::{KeyAction, Library, Shelf};
use crate::state::{
    handle_key_action, handle_mouse_event, AppState, HitRegions, ModalStore, Route,
};
use crate::state::profile::IconStore;
use crate::view::constants::{CARD_GAP, CARD_STRIDE, ICON_GAP, ICON_STRIDE};
use crate::view_state::RailViewport;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Resolved UI options handed over from the shell.
#[derive(Debug, Clone)]
pub struct UiOptions {
    /// Theme name (see [`THEME_NAMES`]).
    pub theme: String,
    /// Display name shown in the header and the picker.
    pub profile_name: String,
    /// Start on the profile picker page instead of browse.
    pub start_in_picker: bool,
    /// Disable colors.
    pub no_color: bool,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    theme: Theme,
    origin: String,
    profile_name: String,
    /// Strip areas from the last draw (for mouse hit-testing)
    regions: HitRegions,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application.
    ///
    /// Sets up the terminal in raw mode with alternate screen and mouse
    /// capture.
    pub fn new(
        library: Library,
        origin: impl Into<String>,
        options: UiOptions,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, library, origin, options))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build an app over an existing terminal (used with `TestBackend`).
    pub fn with_terminal(
        terminal: Terminal<B>,
        library: Library,
        origin: impl Into<String>,
        options: UiOptions,
    ) -> Self {
        let mut app_state = AppState::new(library);
        if options.start_in_picker {
            app_state.route = Route::ProfilePicker;
        }

        let colors = ColorConfig::from_env_and_args(options.no_color);
        let theme = Theme::named(&options.theme, colors);

        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            theme,
            origin: origin.into(),
            profile_name: options.profile_name,
            regions: HitRegions::default(),
        }
    }

    /// Current application state (test access).
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Underlying terminal (test access to the rendered buffer).
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Mutable terminal access (tests resize the backend through this).
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Advance all glide animations one frame (the event-loop timer step).
    ///
    /// Returns true when anything was still moving.
    pub fn tick_glides(&mut self) -> bool {
        self.app_state.tick_glides()
    }

    /// Run the main event loop.
    ///
    /// Returns when the user quits (q or Ctrl+C). Event-driven: redraws
    /// only on input, resize, or glide-animation frames. An idle app
    /// consumes a slow poll timer and nothing else; the fast frame timer
    /// runs only while some rail is gliding.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const IDLE_TICK: Duration = Duration::from_millis(250);
        const GLIDE_FRAME: Duration = Duration::from_millis(50);

        // Initial render - ensures screen has content immediately, and
        // measures the rail viewports for the first time.
        self.draw()?;

        loop {
            let timeout = if self.app_state.is_animating() {
                GLIDE_FRAME
            } else {
                IDLE_TICK
            };

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(()); // User quit
                        }
                        self.draw()?;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        self.draw()?;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "terminal resized");
                        // The next draw re-measures every visible rail.
                        self.draw()?;
                    }
                    _ => {}
                }
            } else if self.app_state.tick_glides() {
                // Timer elapsed mid-glide: advance and repaint.
                self.draw()?;
            }
        }
    }

    /// Handle a single keyboard event.
    ///
    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false; // Unknown key, ignore
        };

        if action == KeyAction::Quit {
            return true;
        }

        self.app_state = handle_key_action(std::mem::take(&mut self.app_state), action);
        false
    }

    /// Handle a single mouse event against the last rendered regions.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        self.app_state =
            handle_mouse_event(std::mem::take(&mut self.app_state), mouse, &self.regions);
    }

    /// Measure, record hit regions, and render the current route.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let area = Rect::new(0, 0, size.width.max(1), size.height);

        match self.app_state.route {
            Route::Browse => {
                let shelf_count = self.app_state.library().shelf_count();
                let capacity =
                    browse_layout(area, self.app_state.first_visible_shelf, shelf_count).capacity;
                self.app_state.ensure_shelf_visible(capacity);
                let layout =
                    browse_layout(area, self.app_state.first_visible_shelf, shelf_count);

                self.measure_browse(&layout);
                self.regions = HitRegions {
                    shelf_strips: layout
                        .shelves
                        .iter()
                        .map(|shelf| (shelf.index, shelf.strip_area))
                        .collect(),
                    icon_strip: None,
                };

                let state = &self.app_state;
                let theme = &self.theme;
                let origin = &self.origin;
                let profile_name = &self.profile_name;
                self.terminal.draw(|frame| {
                    render_browse(frame, state, &layout, theme, origin, profile_name);
                })?;
            }
            Route::ProfilePicker => {
                let layout = picker_layout(area, self.app_state.picker.vertical_offset());

                self.measure_picker(&layout);
                self.regions = HitRegions {
                    shelf_strips: Vec::new(),
                    icon_strip: layout.icon_strip,
                };

                let state = &self.app_state;
                let theme = &self.theme;
                let origin = &self.origin;
                let profile_name = &self.profile_name;
                self.terminal.draw(|frame| {
                    render_picker_page(frame, state, &layout, theme, origin, profile_name);
                })?;
            }
        }

        Ok(())
    }

    /// Create or re-measure the viewports of the visible shelf rails.
    fn measure_browse(&mut self, layout: &BrowseLayout) {
        for shelf_layout in &layout.shelves {
            let count = self
                .app_state
                .library()
                .shelf(shelf_layout.index)
                .map_or(0, Shelf::len);
            let visible = usize::from(shelf_layout.strip_area.width);
            let content = strip_content_width(count, CARD_STRIDE, CARD_GAP);

            if let Some(rail) = self.app_state.rail_mut(shelf_layout.index) {
                match rail.viewport.as_mut() {
                    Some(viewport) => viewport.set_extent(visible, content),
                    None => rail.viewport = Some(RailViewport::new(visible, content)),
                }
            }
        }
    }

    /// Create or re-measure the picker icon rail viewport.
    fn measure_picker(&mut self, layout: &PickerLayout) {
        let Some(strip) = layout.icon_strip else {
            return;
        };
        let count = self.app_state.library().icons().len();
        let visible = usize::from(strip.width);
        let content = strip_content_width(count, ICON_STRIDE, ICON_GAP);

        let rail = &mut self.app_state.picker.rail;
        match rail.viewport.as_mut() {
            Some(viewport) => viewport.set_extent(visible, content),
            None => rail.viewport = Some(RailViewport::new(visible, content)),
        }
    }
}

/// Total strip width occupied by `count` cards of the given stride.
fn strip_content_width(count: usize, stride: u16, gap: u16) -> usize {
    if count == 0 {
        0
    } else {
        count * usize::from(stride) - usize::from(gap)
    }
}

// ===== Page renderers =====

fn render_browse(
    frame: &mut ratatui::Frame,
    state: &AppState,
    layout: &BrowseLayout,
    theme: &Theme,
    origin: &str,
    profile_name: &str,
) {
    render_header(frame, layout.header, state, theme, profile_name);

    for shelf_layout in &layout.shelves {
        let Some(shelf) = state.library().shelf(shelf_layout.index) else {
            continue;
        };
        let Some(rail) = state.rail(shelf_layout.index) else {
            continue;
        };
        let focused = shelf_layout.index == state.selected_shelf;
        render_shelf(frame, shelf, rail, shelf_layout, focused, theme);
    }

    render_status_bar(frame, layout.status, state, theme, origin);

    if state.modal.is_open() {
        if let Some(show) = state.modal.shown() {
            render_detail_modal(frame, show, state.modal.autoplay(), theme);
        }
    }

    if state.help_visible {
        render_help_overlay(frame, theme);
    }
}

fn render_picker_page(
    frame: &mut ratatui::Frame,
    state: &AppState,
    layout: &PickerLayout,
    theme: &Theme,
    origin: &str,
    profile_name: &str,
) {
    render_picker(
        frame,
        state.library(),
        &state.picker,
        &state.icon_store,
        profile_name,
        layout,
        theme,
    );

    render_status_bar(frame, layout.status, state, theme, origin);

    if state.help_visible {
        render_help_overlay(frame, theme);
    }
}

fn render_header(
    frame: &mut ratatui::Frame,
    area: Rect,
    state: &AppState,
    theme: &Theme,
    profile_name: &str,
) {
    let icon_suffix = state
        .icon_store
        .selected()
        .map_or_else(String::new, |icon| format!(" ✦ {icon}"));
    let header = format!(" railview │ {profile_name}{icon_suffix}");
    frame.render_widget(Paragraph::new(header).style(theme.header), area);
}

fn render_status_bar(
    frame: &mut ratatui::Frame,
    area: Rect,
    state: &AppState,
    theme: &Theme,
    origin: &str,
) {
    let library = state.library();
    let mut spans = vec![
        Span::styled(" q quit · p profile · ? help ", theme.status),
        Span::styled(format!("│ {origin} "), theme.status),
        Span::styled(
            format!(
                "│ {} shelves · {} shows · {} icons ",
                library.shelf_count(),
                library.show_count(),
                library.icons().len()
            ),
            theme.status,
        ),
    ];
    if library.malformed_count() > 0 {
        spans.push(Span::styled(
            format!("· {} bad lines", library.malformed_count()),
            theme.error,
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Run the TUI to completion, restoring the terminal afterwards.
///
/// # Errors
///
/// Returns `TuiError` for terminal I/O failures.
pub fn run_with_library(
    library: Library,
    origin: impl Into<String>,
    options: UiOptions,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(library, origin, options)?;
    let result = app.run();
    restore_terminal();
    result
}

/// Best-effort terminal restore; failures here must not mask run errors.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(crossterm::event::DisableMouseCapture);
    let _ = stdout.execute(LeaveAlternateScreen);
}
