//! Cancellable one-shot timer driven by the event loop.
//!
//! The timer never sleeps. The owner passes in the current `Instant` and
//! gets back the [`Ticket`] of a schedule that has come due. Every
//! `schedule` or `cancel` bumps a generation counter, and [`Timer::poll`]
//! only hands out a ticket stamped with the current generation, so a
//! schedule replaced or cancelled before its deadline never fires.

use std::time::{Duration, Instant};

/// Handle for one scheduled firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    due: Instant,
}

/// At most one pending firing.
#[derive(Debug, Clone, Default)]
pub struct Timer {
    generation: u64,
    pending: Option<Ticket>,
}

impl Timer {
    /// Idle timer with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a firing `delay` after `now`, replacing any pending one.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        let ticket = Ticket {
            generation: self.generation,
            due: now + delay,
        };
        self.pending = Some(ticket);
        ticket
    }

    /// Drop the pending firing. Outstanding tickets become stale.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    /// Whether a firing is scheduled.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending firing comes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|t| t.due)
    }

    /// Time left until the deadline, zero if already due.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline().map(|due| due.saturating_duration_since(now))
    }

    /// Take the pending ticket if it is due at `now`.
    ///
    /// Stale tickets are discarded, never returned.
    pub fn poll(&mut self, now: Instant) -> Option<Ticket> {
        let ticket = self.pending.filter(|t| t.due <= now)?;
        self.pending = None;
        self.is_current(&ticket).then_some(ticket)
    }

    /// Whether `ticket` belongs to the most recent schedule.
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.generation == self.generation
    }
}
