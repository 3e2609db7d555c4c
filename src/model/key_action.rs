//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// Printable characters are not actions: they edit the focused field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Search
    /// Run the search for the current array and target. Default: Enter
    Search,
    /// Generate a random sorted array of the requested length. Default: Ctrl+g
    Generate,
    /// Clear every input and the current trace. Default: Ctrl+r
    Reset,

    // Playback
    /// Show the next step. Default: →/Page Down
    NextStep,
    /// Show the previous step. Default: ←/Page Up
    PrevStep,
    /// Jump to the first step. Default: Home
    FirstStep,
    /// Jump to the terminal step. Default: End
    LastStep,
    /// Start auto-play from the first step, or cancel it if running. Default: Ctrl+a
    ToggleAutoPlay,

    // Fields
    /// Move focus to the next input field. Default: Tab
    CycleFocus,
    /// Move focus to the previous input field. Default: Shift+Tab
    CycleFocusBack,
    /// Delete the last character of the focused field. Default: Backspace
    DeleteChar,
    /// Select the next random-length preset. Default: ↓
    NextPreset,
    /// Select the previous random-length preset. Default: ↑
    PrevPreset,

    // Application
    /// Toggle the info overlay (color legend and shortcuts). Default: F1/Ctrl+h
    Help,
    /// Close the overlay or cancel auto-play. Default: Esc
    Cancel,
    /// Exit the application. Default: Ctrl+q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Actions that remain available while the info overlay is open.
    pub fn allowed_in_help(self) -> bool {
        matches!(self, KeyAction::Help | KeyAction::Cancel | KeyAction::Quit)
    }
}
