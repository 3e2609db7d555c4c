//! TUI rendering and terminal management (impure shell)

pub mod array_display;
pub mod constants;
mod help;
mod input_fields;
mod layout;
mod steps_panel;
pub mod styles;

pub use array_display::{classify, ArrayDisplay, ArrayGeometry, EMPTY_ARRAY_PLACEHOLDER};
pub use help::render_help_overlay;
pub use input_fields::{ActionsBox, InputBox};
pub use layout::{compute_areas, render_layout, ScreenAreas};
pub use steps_panel::StepsPanel;
pub use styles::{CellRole, ColorConfig, Palette};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, KeyAction};
use crate::state::{field_handler, AppState, FocusField};
use constants::EVENT_POLL_INTERVAL_MS;
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
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
    palette: Palette,
    rng: StdRng,
    /// Cell placement from the last draw (for mouse click detection)
    last_array_geometry: Option<ArrayGeometry>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(app_state: AppState, palette: Palette, rng: StdRng) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            palette,
            rng,
            last_array_geometry: None,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. Blocks on input until the next
    /// auto-play deadline, then applies the due tick.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let timeout = self.poll_timeout(Instant::now());
            if event::poll(timeout)? {
                match event::read()? {
                    // Terminals with enhanced reporting also send releases
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        if self.handle_key(key, Instant::now()) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        self.draw()?;
                    }
                    Event::Resize(..) => self.draw()?,
                    _ => {}
                }
            }

            if self.app_state.tick(Instant::now()) {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// How long the event loop may block: until the auto-play deadline,
    /// capped by the idle poll interval.
    fn poll_timeout(&self, now: Instant) -> Duration {
        let idle = Duration::from_millis(EVENT_POLL_INTERVAL_MS);
        self.app_state
            .autoplay_remaining(now)
            .map_or(idle, |remaining| remaining.min(idle))
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Ctrl+C always quits, even if rebound
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Escape closes the overlay before key binding dispatch
        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            if !self.app_state.help_visible {
                self.handle_text_key(key);
            }
            return false;
        };

        // The overlay swallows everything but its own toggle and quit
        if self.app_state.help_visible && !action.allowed_in_help() {
            return false;
        }

        debug!(?action, "key action");
        match action {
            KeyAction::Search => {
                if self.app_state.focus == FocusField::Length {
                    self.generate();
                } else {
                    // A rejection is kept as the notice
                    let _ = self.app_state.search();
                }
            }
            KeyAction::Generate => self.generate(),
            KeyAction::Reset => self.app_state.reset(),
            KeyAction::NextStep => {
                self.app_state.next_step();
            }
            KeyAction::PrevStep => {
                self.app_state.prev_step();
            }
            KeyAction::FirstStep => {
                self.app_state.first_step();
            }
            KeyAction::LastStep => {
                self.app_state.last_step();
            }
            KeyAction::ToggleAutoPlay => {
                self.app_state.toggle_autoplay(now);
            }
            KeyAction::CycleFocus => self.app_state.focus = self.app_state.focus.next(),
            KeyAction::CycleFocusBack => self.app_state.focus = self.app_state.focus.prev(),
            KeyAction::DeleteChar => {
                field_handler::handle_backspace(&mut self.app_state);
            }
            KeyAction::NextPreset => {
                field_handler::handle_preset(&mut self.app_state, true);
            }
            KeyAction::PrevPreset => {
                field_handler::handle_preset(&mut self.app_state, false);
            }
            KeyAction::Help => self.app_state.help_visible = !self.app_state.help_visible,
            KeyAction::Cancel => self.app_state.cancel_autoplay(),
            KeyAction::Quit => return true,
        }

        false
    }

    /// Unbound keys: plain characters edit the focused field.
    fn handle_text_key(&mut self, key: KeyEvent) {
        if let KeyCode::Char(ch) = key.code {
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                field_handler::handle_char_input(&mut self.app_state, ch);
            }
        }
    }

    fn generate(&mut self) {
        // A rejection is kept as the inline length error
        let _ = self.app_state.generate_random(&mut self.rng);
    }

    /// Handle a single mouse event
    ///
    /// Left-clicking an array cell makes its value the target.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.app_state.help_visible {
            return;
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(geometry) = self.last_array_geometry else {
            return;
        };
        if let Some(index) = geometry.cell_at(mouse.column, mouse.row) {
            if self.app_state.select_target_at(index) {
                debug!(index, "target set from click");
            }
        }
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let palette = self.palette;
        let mut geometry = None;

        self.terminal.draw(|frame| {
            geometry = render_layout(frame, state, palette);
            if state.help_visible {
                render_help_overlay(frame, palette);
            }
        })?;

        self.last_array_geometry = geometry;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.
// They are gated with cfg to ensure they're not accessible from outside the crate.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used by every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        palette: Palette,
        rng: StdRng,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            palette,
            rng,
            last_array_geometry: None,
        }
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn app_state_mut(&mut self) -> &mut AppState {
        &mut self.app_state
    }

    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent, now: Instant) -> bool {
        self.handle_key(key, now)
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse);
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn poll_timeout_test(&self, now: Instant) -> Duration {
        self.poll_timeout(now)
    }

    pub(crate) fn array_geometry(&self) -> Option<ArrayGeometry> {
        self.last_array_geometry
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initial state requested on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupOptions {
    /// Pre-filled array text.
    pub array: Option<String>,
    /// Pre-filled target.
    pub target: Option<i64>,
    /// Generate a random array instead of using `array`.
    pub random: bool,
    /// Start auto-play after the initial search.
    pub autoplay: bool,
    /// Seed for random generation.
    pub seed: Option<u64>,
    /// Disable colors.
    pub no_color: bool,
}

impl StartupOptions {
    /// RNG for this run: seeded when requested, otherwise from entropy.
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
    }
}

/// Apply startup options to a fresh state.
///
/// The search runs only when both the array and the target were given;
/// auto-play only starts after a successful search.
pub fn apply_startup<R: Rng + ?Sized>(
    state: &mut AppState,
    options: &StartupOptions,
    rng: &mut R,
    now: Instant,
) {
    if options.random {
        let _ = state.generate_random(rng);
    } else if let Some(array) = &options.array {
        state.set_array_input(array.as_str());
    }

    let Some(target) = options.target else {
        return;
    };
    state.set_target_input(target.to_string());

    if state.array().is_empty() || state.search().is_err() {
        return;
    }
    if options.autoplay {
        state.toggle_autoplay(now);
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_options(config: &ResolvedConfig, options: StartupOptions) -> Result<(), TuiError> {
    let mut rng = options.rng();
    let mut app_state = AppState::new(config.search_settings());
    apply_startup(&mut app_state, &options, &mut rng, Instant::now());
    let palette = Palette::new(ColorConfig::from_env_and_args(options.no_color));

    info!(
        array_len = app_state.array().len(),
        autoplay = app_state.is_autoplaying(),
        "starting TUI"
    );
    let mut app = TuiApp::new(app_state, palette, rng)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
