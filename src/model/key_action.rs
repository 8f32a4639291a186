//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Rail commands
    /// Move the focused rail left by one viewport width. Default: h/←
    MoveLeft,
    /// Move the focused rail right by one viewport width. Default: l/→
    MoveRight,

    // Shelf focus
    /// Focus the shelf above. Default: k/↑
    PrevShelf,
    /// Focus the shelf below. Default: j/↓
    NextShelf,

    // Item interaction
    /// Activate the card under focus (open detail modal / select icon).
    /// Default: Enter/Space
    Activate,
    /// Close the topmost surface (modal, picker, help). Default: Esc
    Back,

    // Routes
    /// Open the profile icon picker. Default: p
    OpenProfilePicker,

    // Chrome
    /// Toggle the key-binding help overlay. Default: ?
    ToggleHelp,
    /// Quit the application. Default: q (Ctrl+C always quits)
    Quit,
}
