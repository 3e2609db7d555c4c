//! Auto-play: run a trace to completion with a fixed delay between steps.

use crate::state::playback::PlaybackState;
use crate::state::schedule::Timer;
use std::time::{Duration, Instant};
use tracing::debug;

/// Drives [`PlaybackState::next`] from a cancellable [`Timer`].
#[derive(Debug, Clone)]
pub struct AutoPlay {
    delay: Duration,
    timer: Timer,
}

impl AutoPlay {
    /// Stopped auto-play advancing every `delay`.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            timer: Timer::new(),
        }
    }

    /// Pause between advances.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Rewind `playback` to its first step and schedule the first advance.
    ///
    /// Returns false, and schedules nothing, when there is no trace or the
    /// trace has a single step.
    pub fn start(&mut self, playback: &mut PlaybackState, now: Instant) -> bool {
        self.timer.cancel();
        if !playback.has_trace() {
            return false;
        }
        playback.first();
        if playback.is_at_end() {
            return false;
        }
        self.timer.schedule(now, self.delay);
        debug!(delay_ms = self.delay.as_millis() as u64, "auto-play started");
        true
    }

    /// Stop the run. No advance scheduled before this call will apply.
    pub fn cancel(&mut self) {
        if self.timer.is_pending() {
            debug!("auto-play cancelled");
        }
        self.timer.cancel();
    }

    /// Whether an advance is scheduled.
    pub fn is_running(&self) -> bool {
        self.timer.is_pending()
    }

    /// When the event loop must wake up next.
    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Time left until the next advance, zero if it is already due.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }

    /// Advance `playback` if the pending tick is due at `now`.
    ///
    /// Reschedules from `now` until the terminal step is shown. Returns
    /// whether the cursor moved.
    pub fn tick(&mut self, playback: &mut PlaybackState, now: Instant) -> bool {
        if self.timer.poll(now).is_none() {
            return false;
        }
        let moved = playback.next();
        if playback.is_at_end() {
            debug!(cursor = playback.cursor(), "auto-play finished");
        } else {
            self.timer.schedule(now, self.delay);
        }
        moved
    }
}
