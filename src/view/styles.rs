//! Color palette for array cells, messages, and chrome.

use crate::state::MessageKind;
use ratatui::style::{Color, Modifier, Style};

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

    /// Explicit setting, bypassing the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== CellRole =====

/// How an array cell relates to the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    /// Outside `[low, high]`.
    Default,
    /// Inside `[low, high]`.
    InRange,
    /// The probed `mid` element.
    Mid,
    /// Range exhausted: the target is not in the array.
    Exhausted,
}

// ===== Palette =====

/// Styles for every themed element.
///
/// With colors disabled, roles are told apart by modifiers only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: ColorConfig,
}

impl Palette {
    /// Palette honoring `colors`.
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    /// Whether colors are in use.
    pub fn colors_enabled(&self) -> bool {
        self.colors.colors_enabled()
    }

    /// Style of an array cell.
    pub fn cell(&self, role: CellRole) -> Style {
        if !self.colors_enabled() {
            return match role {
                CellRole::Default => Style::default().add_modifier(Modifier::DIM),
                CellRole::InRange => Style::default().add_modifier(Modifier::BOLD),
                CellRole::Mid => Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
                CellRole::Exhausted => Style::default().add_modifier(Modifier::CROSSED_OUT),
            };
        }
        match role {
            CellRole::Default => Style::default().fg(Color::Black).bg(Color::Gray),
            CellRole::InRange => Style::default().fg(Color::White).bg(Color::Green),
            CellRole::Mid => Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            CellRole::Exhausted => Style::default().fg(Color::White).bg(Color::Red),
        }
    }

    /// Style of the index label above a cell.
    pub fn cell_index(&self) -> Style {
        self.muted()
    }

    /// Style of the status message.
    pub fn message(&self, kind: MessageKind) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        if !self.colors_enabled() {
            return style;
        }
        match kind {
            MessageKind::Progress => style.fg(Color::Yellow),
            MessageKind::Success => style.fg(Color::Green),
            MessageKind::Failure => style.fg(Color::Red),
        }
    }

    /// Style of titles and the step counter.
    pub fn title(&self) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        if self.colors_enabled() {
            style.fg(Color::Cyan)
        } else {
            style
        }
    }

    /// Border of the focused input box.
    pub fn focused_border(&self) -> Style {
        if self.colors_enabled() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        }
    }

    /// Style of secondary text and hints.
    pub fn muted(&self) -> Style {
        if self.colors_enabled() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    }

    /// Inline error text.
    pub fn error(&self) -> Style {
        if self.colors_enabled() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().add_modifier(Modifier::UNDERLINED)
        }
    }

    /// Text cursor at the end of the focused field.
    pub fn cursor(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    /// Key name in hint lines.
    pub fn key_hint(&self) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        if self.colors_enabled() {
            style.fg(Color::Cyan)
        } else {
            style
        }
    }

    /// AUTO badge in the status bar.
    pub fn badge(&self) -> Style {
        if self.colors_enabled() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}
