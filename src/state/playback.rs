//! Playback controller: a cursor over one search trace.
//!
//! Transitions saturate at both ends, and every transition is a no-op
//! while no trace is loaded.

use crate::model::{SearchStep, SearchTrace};

/// Trace being displayed and the index of the displayed step.
///
/// Invariant: `cursor < trace.len()` when a trace is loaded, `cursor == 0`
/// otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackState {
    trace: Option<SearchTrace>,
    cursor: usize,
}

impl PlaybackState {
    /// Empty controller with no trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the trace and show its first step.
    pub fn load(&mut self, trace: SearchTrace) {
        self.trace = Some(trace);
        self.cursor = 0;
    }

    /// Drop the trace.
    pub fn reset(&mut self) {
        self.trace = None;
        self.cursor = 0;
    }

    /// Advance one step, staying put on the terminal step.
    ///
    /// Returns whether the cursor moved.
    pub fn next(&mut self) -> bool {
        let Some(trace) = &self.trace else {
            return false;
        };
        let target = (self.cursor + 1).min(trace.len() - 1);
        self.move_to(target)
    }

    /// Step back one step, staying put on the first step.
    ///
    /// Returns whether the cursor moved.
    pub fn previous(&mut self) -> bool {
        if self.trace.is_none() {
            return false;
        }
        self.move_to(self.cursor.saturating_sub(1))
    }

    /// Jump to the first step.
    pub fn first(&mut self) -> bool {
        if self.trace.is_none() {
            return false;
        }
        self.move_to(0)
    }

    /// Jump to the terminal step.
    pub fn last(&mut self) -> bool {
        let Some(trace) = &self.trace else {
            return false;
        };
        self.move_to(trace.len() - 1)
    }

    fn move_to(&mut self, cursor: usize) -> bool {
        let moved = cursor != self.cursor;
        self.cursor = cursor;
        moved
    }

    /// Loaded trace, if any.
    pub fn trace(&self) -> Option<&SearchTrace> {
        self.trace.as_ref()
    }

    /// Whether a trace is loaded.
    pub fn has_trace(&self) -> bool {
        self.trace.is_some()
    }

    /// Index of the displayed step.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Step under the cursor.
    pub fn current(&self) -> Option<&SearchStep> {
        self.trace.as_ref().and_then(|t| t.get(self.cursor))
    }

    /// True on the first step, and also when no trace is loaded.
    pub fn is_at_start(&self) -> bool {
        self.cursor == 0
    }

    /// True on the terminal step, and also when no trace is loaded.
    pub fn is_at_end(&self) -> bool {
        self.trace
            .as_ref()
            .is_none_or(|t| self.cursor + 1 >= t.len())
    }

    /// One-based position and trace length, for "Step i / n".
    pub fn position(&self) -> Option<(usize, usize)> {
        self.trace.as_ref().map(|t| (self.cursor + 1, t.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StepOutcome;
    use crate::search::generate;

    fn loaded(array: &[i64], target: i64) -> PlaybackState {
        let mut playback = PlaybackState::new();
        playback.load(generate(array, target));
        playback
    }

    #[test]
    fn new_has_no_trace() {
        let playback = PlaybackState::new();
        assert!(!playback.has_trace());
        assert_eq!(playback.cursor(), 0);
        assert_eq!(playback.current(), None);
        assert_eq!(playback.position(), None);
    }

    #[test]
    fn load_starts_at_first_step() {
        let playback = loaded(&[1, 3, 5, 7, 9], 4);
        assert_eq!(playback.cursor(), 0);
        assert_eq!(playback.position(), Some((1, 4)));
        assert_eq!(playback.current().map(|s| s.mid), Some(Some(2)));
    }

    #[test]
    fn next_advances_until_terminal() {
        let mut playback = loaded(&[1, 3, 5, 7, 9], 4);

        assert!(playback.next());
        assert!(playback.next());
        assert!(playback.next());
        assert_eq!(playback.cursor(), 3);
        assert!(playback.is_at_end());
        assert_eq!(
            playback.current().map(|s| s.outcome),
            Some(StepOutcome::NotFound)
        );
    }

    #[test]
    fn next_at_final_step_is_idempotent() {
        let mut playback = loaded(&[1, 3, 5, 7, 9], 5);
        playback.last();

        assert!(!playback.next());
        assert_eq!(playback.cursor(), 1);
    }

    #[test]
    fn previous_at_first_step_is_idempotent() {
        let mut playback = loaded(&[1, 3, 5, 7, 9], 5);

        assert!(!playback.previous());
        assert_eq!(playback.cursor(), 0);
        assert!(playback.is_at_start());
    }

    #[test]
    fn previous_walks_back() {
        let mut playback = loaded(&[1, 3, 5, 7, 9], 4);
        playback.last();

        assert!(playback.previous());
        assert_eq!(playback.cursor(), 2);
    }

    #[test]
    fn first_and_last_jump_to_ends() {
        let mut playback = loaded(&[1, 3, 5, 7, 9], 4);

        assert!(playback.last());
        assert_eq!(playback.cursor(), 3);
        assert!(playback.first());
        assert_eq!(playback.cursor(), 0);
        assert!(!playback.first());
    }

    #[test]
    fn reset_clears_trace_and_cursor() {
        let mut playback = loaded(&[1, 3, 5, 7, 9], 4);
        playback.next();

        playback.reset();

        assert!(!playback.has_trace());
        assert_eq!(playback.cursor(), 0);
    }

    #[test]
    fn transitions_without_trace_are_noops() {
        let mut playback = PlaybackState::new();

        assert!(!playback.next());
        assert!(!playback.previous());
        assert!(!playback.first());
        assert!(!playback.last());
        assert_eq!(playback.cursor(), 0);
        assert!(playback.is_at_end());
    }

    #[test]
    fn single_step_trace_is_both_start_and_end() {
        let playback = loaded(&[], 3);
        assert!(playback.is_at_start());
        assert!(playback.is_at_end());
    }

    #[test]
    fn reload_rewinds_cursor() {
        let mut playback = loaded(&[1, 3, 5, 7, 9], 4);
        playback.last();

        playback.load(generate(&[1, 2], 2));

        assert_eq!(playback.cursor(), 0);
        assert_eq!(playback.position(), Some((1, 3)));
    }
}
