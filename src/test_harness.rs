//! Acceptance test harness for TUI testing
//!
//! Provides a high-level API for acceptance testing by wrapping
//! `TuiApp<TestBackend>` with convenient methods for simulating user
//! interactions and inspecting the rendered buffer.

use crate::integration::process_lines;
use crate::model::Library;
use crate::state::AppState;
use crate::view::{TuiApp, UiOptions};
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed to keep assertions clean.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }

    lines.join("\n")
}

/// Test harness for acceptance testing.
///
/// Wraps `TuiApp<TestBackend>` to provide a clean API for simulating user
/// interactions. Every interaction redraws, like the real event loop.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    quit_requested: bool,
}

impl AcceptanceTestHarness {
    /// Build a harness over catalog lines with the default 100x30 terminal.
    pub fn from_catalog(lines: &[&str]) -> Self {
        Self::from_catalog_with_size(lines, 100, 30)
    }

    /// Build a harness over catalog lines with a custom terminal size.
    ///
    /// Performs the initial draw, which measures the rail viewports (the
    /// "mount" moment - before this, every rail command is a no-op).
    pub fn from_catalog_with_size(lines: &[&str], width: u16, height: u16) -> Self {
        let owned: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
        let mut library = Library::new();
        for entry in process_lines(owned, 1) {
            library.add_entry(entry);
        }

        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("test terminal");
        let options = UiOptions {
            theme: "dark".to_string(),
            profile_name: "Guest".to_string(),
            start_in_picker: false,
            no_color: true,
        };

        let mut app = TuiApp::with_terminal(terminal, library, "test-catalog", options);
        app.draw().expect("initial draw");

        Self {
            app,
            quit_requested: false,
        }
    }

    /// Send a key press and redraw.
    pub fn key(&mut self, code: KeyCode) -> &mut Self {
        self.key_with_modifiers(code, KeyModifiers::NONE)
    }

    /// Send a key press with modifiers and redraw.
    pub fn key_with_modifiers(&mut self, code: KeyCode, modifiers: KeyModifiers) -> &mut Self {
        let quit = self.app.handle_key(KeyEvent::new(code, modifiers));
        self.quit_requested |= quit;
        self.app.draw().expect("draw after key");
        self
    }

    /// Press the left mouse button at a position and redraw.
    pub fn mouse_down(&mut self, column: u16, row: u16) -> &mut Self {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }

    /// Drag the held mouse to a position and redraw.
    pub fn mouse_drag(&mut self, column: u16, row: u16) -> &mut Self {
        self.mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
    }

    /// Release the mouse at a position and redraw.
    pub fn mouse_up(&mut self, column: u16, row: u16) -> &mut Self {
        self.mouse(MouseEventKind::Up(MouseButton::Left), column, row)
    }

    /// Send a horizontal wheel tick and redraw.
    pub fn wheel_right(&mut self, column: u16, row: u16) -> &mut Self {
        self.mouse(MouseEventKind::ScrollRight, column, row)
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) -> &mut Self {
        self.app.handle_mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
        self.app.draw().expect("draw after mouse");
        self
    }

    /// Drain all in-flight glides, redrawing the settled frame.
    pub fn settle(&mut self) -> &mut Self {
        // Bounded: the glide decays geometrically.
        for _ in 0..200 {
            if !self.app.tick_glides() {
                break;
            }
        }
        self.app.draw().expect("draw after settle");
        self
    }

    /// Advance glides one frame (what the event-loop timer does).
    pub fn tick(&mut self) -> &mut Self {
        self.app.tick_glides();
        self.app.draw().expect("draw after tick");
        self
    }

    /// Whether a quit was requested by a key press.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// The rendered screen as text.
    pub fn screen(&self) -> String {
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Application state access for assertions.
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }
}
