//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.
//! Time is virtual: auto-play only advances when the test calls `advance`.

use crate::config::KeyBindings;
use crate::state::{AppState, SearchSettings};
use crate::view::{ColorConfig, Palette, TuiApp};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::{Duration, Instant};

/// Seed used by every harness, so random arrays are reproducible.
pub const HARNESS_SEED: u64 = 0x5EED;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep snapshots clean.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    now: Instant,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Harness with default settings and a 120x30 terminal.
    pub fn new() -> Self {
        Self::with_settings(SearchSettings::default(), 120, 30)
    }

    /// Harness with custom settings and terminal size.
    pub fn with_settings(settings: SearchSettings, width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("TestBackend never fails");
        let app = TuiApp::new_for_test(
            terminal,
            AppState::new(settings),
            KeyBindings::default(),
            Palette::new(ColorConfig::new(true)),
            StdRng::seed_from_u64(HARNESS_SEED),
        );

        Self {
            app,
            now: Instant::now(),
            running: true,
        }
    }

    /// Send a single key event
    ///
    /// Returns true if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods), self.now);
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send Ctrl plus a character.
    pub fn send_ctrl(&mut self, ch: char) -> bool {
        self.send_key_with_mods(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    /// Send a sequence of keys, stopping early if the app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Move virtual time forward and apply any due auto-play tick.
    ///
    /// Returns whether the displayed step changed.
    pub fn advance(&mut self, by: Duration) -> bool {
        self.now += by;
        self.app.app_state_mut().tick(self.now)
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running (didn't quit)
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");

        let buffer = self.app.terminal().backend().buffer();
        buffer_to_string(buffer)
    }

    /// Send a left mouse click at the specified coordinates
    pub fn click_at(&mut self, column: u16, row: u16) {
        if !self.running {
            return;
        }

        // Render first to ensure layout is calculated
        let _ = self.app.render_test();

        let mouse_event = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };

        self.app.handle_mouse_test(mouse_event);
    }

    /// Click the value line of the array cell at `index`.
    ///
    /// Returns false when the cell is not on screen.
    pub fn click_cell(&mut self, index: usize) -> bool {
        let _ = self.app.render_test();
        let Some(rect) = self
            .app
            .array_geometry()
            .and_then(|geometry| geometry.cell_rect(index))
        else {
            return false;
        };
        self.click_at(rect.x, rect.y + 1);
        true
    }
}
