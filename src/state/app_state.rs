//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. The shell owns
//! exactly one AppState and is its only writer.

use crate::input::{self, RandomArrayRequest};
use crate::model::{InputError, SearchStep, StepOutcome};
use crate::search;
use crate::state::{AutoPlay, PlaybackState};
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{info, warn};

// ===== FocusField =====

/// Input field that receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusField {
    /// Comma-separated array text.
    #[default]
    Array,
    /// Target number.
    Target,
    /// Random array length.
    Length,
}

impl FocusField {
    /// Array → Target → Length → Array.
    pub fn next(self) -> Self {
        match self {
            FocusField::Array => FocusField::Target,
            FocusField::Target => FocusField::Length,
            FocusField::Length => FocusField::Array,
        }
    }

    /// Reverse of [`FocusField::next`].
    pub fn prev(self) -> Self {
        match self {
            FocusField::Array => FocusField::Length,
            FocusField::Target => FocusField::Array,
            FocusField::Length => FocusField::Target,
        }
    }
}

// ===== SearchSettings =====

/// Tunables resolved from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    /// Pause between auto-play steps.
    pub autoplay_delay: Duration,
    /// Initial and post-reset value of the length field.
    pub random_length: usize,
    /// Smallest value range for random arrays.
    pub min_value_range: usize,
    /// Value range grows as `length * value_range_factor`.
    pub value_range_factor: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            autoplay_delay: Duration::from_millis(800),
            random_length: 10,
            min_value_range: 100,
            value_range_factor: 2,
        }
    }
}

// ===== Highlight =====

/// Window the array display colors: `[low, high]` and the probed `mid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    /// Inclusive lower bound.
    pub low: isize,
    /// Inclusive upper bound. Below `low` when exhausted.
    pub high: isize,
    /// Probed index, if any.
    pub mid: Option<usize>,
}

impl Highlight {
    /// Whole array in range, nothing probed.
    pub fn full(len: usize) -> Self {
        Self {
            low: 0,
            high: len as isize - 1,
            mid: None,
        }
    }

    /// Window described by one search step.
    pub fn from_step(step: &SearchStep) -> Self {
        Self {
            low: step.low,
            high: step.high,
            mid: step.mid,
        }
    }

    /// True once no index is left in range.
    pub fn is_exhausted(&self) -> bool {
        self.low > self.high
    }

    /// Whether `index` lies in `[low, high]`.
    pub fn contains(&self, index: usize) -> bool {
        let index = index as isize;
        !self.is_exhausted() && index >= self.low && index <= self.high
    }
}

// ===== MessageKind =====

/// Color class of the status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Search in progress.
    Progress,
    /// Target found.
    Success,
    /// Target not found, or input rejected.
    Failure,
}

impl From<StepOutcome> for MessageKind {
    fn from(outcome: StepOutcome) -> Self {
        match outcome {
            StepOutcome::Continue => MessageKind::Progress,
            StepOutcome::Found => MessageKind::Success,
            StepOutcome::NotFound => MessageKind::Failure,
        }
    }
}

// ===== AppState =====

/// Application state. Pure data plus transitions; the only side effect is
/// logging.
///
/// # State Transitions
///
/// - Any edit of the array or target text discards the trace and cancels
///   auto-play.
/// - `search` replaces the trace, or records an [`InputError`] notice.
/// - `reset` returns every field to its initial value.
#[derive(Debug, Clone)]
pub struct AppState {
    settings: SearchSettings,

    /// Field receiving typed characters.
    pub focus: FocusField,

    array_input: String,
    array: Vec<i64>,
    target_input: String,
    length_input: String,

    /// Rejection from the last search attempt.
    notice: Option<InputError>,
    /// Inline error under the length field.
    length_error: Option<InputError>,

    playback: PlaybackState,
    autoplay: AutoPlay,

    /// Whether the info overlay is shown.
    pub help_visible: bool,
}

impl AppState {
    /// Fresh state. The length field starts at `settings.random_length`,
    /// clamped to the cap like typed input.
    pub fn new(settings: SearchSettings) -> Self {
        let mut state = Self {
            settings,
            focus: FocusField::default(),
            array_input: String::new(),
            array: Vec::new(),
            target_input: String::new(),
            length_input: String::new(),
            notice: None,
            length_error: None,
            playback: PlaybackState::new(),
            autoplay: AutoPlay::new(settings.autoplay_delay),
            help_visible: false,
        };
        state.set_length_input(settings.random_length.to_string());
        state
    }

    // ===== Accessors =====

    /// Tunables this state was built with.
    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Raw array field text.
    pub fn array_input(&self) -> &str {
        &self.array_input
    }

    /// Parsed, sorted array.
    pub fn array(&self) -> &[i64] {
        &self.array
    }

    /// Raw target field text.
    pub fn target_input(&self) -> &str {
        &self.target_input
    }

    /// Raw length field text.
    pub fn length_input(&self) -> &str {
        &self.length_input
    }

    /// Rejection from the last search attempt.
    pub fn notice(&self) -> Option<&InputError> {
        self.notice.as_ref()
    }

    /// Inline error under the length field.
    pub fn length_error(&self) -> Option<&InputError> {
        self.length_error.as_ref()
    }

    /// Trace and cursor being displayed.
    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    /// Whether auto-play is running.
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    /// How long the event loop may wait before the next auto-play tick.
    pub fn autoplay_remaining(&self, now: Instant) -> Option<Duration> {
        self.autoplay.remaining(now)
    }

    /// Text of the focused field.
    pub fn focused_text(&self) -> &str {
        match self.focus {
            FocusField::Array => &self.array_input,
            FocusField::Target => &self.target_input,
            FocusField::Length => &self.length_input,
        }
    }

    /// Highlight window for the array display.
    pub fn highlight(&self) -> Highlight {
        self.playback
            .current()
            .map(Highlight::from_step)
            .unwrap_or_else(|| Highlight::full(self.array.len()))
    }

    /// Status message: a pending notice wins over the current step.
    pub fn status_message(&self) -> Option<(String, MessageKind)> {
        if let Some(notice) = &self.notice {
            return Some((notice.to_string(), MessageKind::Failure));
        }
        self.playback
            .current()
            .map(|step| (step.message.clone(), step.outcome.into()))
    }

    // ===== Input edits =====

    /// Replace the array text and re-parse it.
    pub fn set_array_input(&mut self, text: impl Into<String>) {
        self.array_input = text.into();
        self.array = input::parse_array(&self.array_input);
        self.discard_trace();
    }

    /// Replace the target text.
    pub fn set_target_input(&mut self, text: impl Into<String>) {
        self.target_input = text.into();
        self.discard_trace();
    }

    /// Replace the length text, clamping values above the cap.
    pub fn set_length_input(&mut self, text: impl Into<String>) {
        let text = text.into();
        match text.trim().parse::<usize>() {
            Ok(n) if n > input::MAX_RANDOM_LENGTH => {
                self.length_error = Some(InputError::LengthTooLarge {
                    requested: n,
                    max: input::MAX_RANDOM_LENGTH,
                });
                self.length_input = input::MAX_RANDOM_LENGTH.to_string();
            }
            _ => {
                self.length_error = None;
                self.length_input = text;
            }
        }
    }

    /// Use the value at `index` as the target.
    ///
    /// Ignored while auto-play runs or when `index` is out of bounds.
    pub fn select_target_at(&mut self, index: usize) -> bool {
        if self.is_autoplaying() {
            return false;
        }
        let Some(&value) = self.array.get(index) else {
            return false;
        };
        self.set_target_input(value.to_string());
        true
    }

    fn discard_trace(&mut self) {
        self.autoplay.cancel();
        self.playback.reset();
        self.notice = None;
    }

    // ===== Commands =====

    /// Build a fresh trace from the current array and target.
    ///
    /// On rejection the notice is recorded, the trace cleared, and the
    /// error returned.
    pub fn search(&mut self) -> Result<(), InputError> {
        self.discard_trace();
        let result = input::validate_array(&self.array)
            .and_then(|()| input::parse_target(&self.target_input));
        match result {
            Ok(target) => {
                let trace = search::generate(&self.array, target);
                info!(
                    len = self.array.len(),
                    target,
                    steps = trace.len(),
                    outcome = ?trace.outcome(),
                    "search executed"
                );
                self.playback.load(trace);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "search rejected");
                self.notice = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Clear every input, the trace, and any messages.
    pub fn reset(&mut self) {
        self.autoplay.cancel();
        self.playback.reset();
        self.array_input.clear();
        self.array.clear();
        self.target_input.clear();
        self.notice = None;
        self.set_length_input(self.settings.random_length.to_string());
        self.focus = FocusField::default();
        info!("state reset");
    }

    /// Replace the array with random unique values of the requested length.
    ///
    /// An empty or non-numeric length field counts as zero.
    pub fn generate_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), InputError> {
        self.length_error = None;
        let length = self.length_input.trim().parse::<usize>().unwrap_or(0);
        let request = RandomArrayRequest::new(
            length,
            self.settings.min_value_range,
            self.settings.value_range_factor,
        );
        match request {
            Ok(request) => {
                let values = request.generate(rng);
                info!(
                    length,
                    value_range = request.value_range(),
                    "random array generated"
                );
                self.set_array_input(input::format_array(&values));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "random generation skipped");
                self.length_error = Some(err.clone());
                Err(err)
            }
        }
    }

    // ===== Playback =====

    /// Show the next step.
    pub fn next_step(&mut self) -> bool {
        self.playback.next()
    }

    /// Show the previous step.
    pub fn prev_step(&mut self) -> bool {
        self.playback.previous()
    }

    /// Jump to the first step.
    pub fn first_step(&mut self) -> bool {
        self.playback.first()
    }

    /// Jump to the terminal step.
    pub fn last_step(&mut self) -> bool {
        self.playback.last()
    }

    /// Start auto-play from the first step, or stop it when running.
    ///
    /// Without a trace, a search is attempted first.
    pub fn toggle_autoplay(&mut self, now: Instant) -> bool {
        if self.autoplay.is_running() {
            self.autoplay.cancel();
            return false;
        }
        if !self.playback.has_trace() && self.search().is_err() {
            return false;
        }
        self.autoplay.start(&mut self.playback, now)
    }

    /// Stop auto-play, leaving the cursor where it is.
    pub fn cancel_autoplay(&mut self) {
        self.autoplay.cancel();
    }

    /// Apply a due auto-play tick. Returns whether the display changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.autoplay.tick(&mut self.playback, now)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SearchSettings::default())
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
