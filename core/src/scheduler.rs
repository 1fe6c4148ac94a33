//! Tick scheduling — owns the periodic-drift timing state.
//!
//! The historical timer lived inside the UI event loop. Here it is an
//! explicit, presentation-free value with start/stop/cancel semantics:
//! the host loop polls `due(now)` whenever it is idle, and the
//! scheduler reports whether a leaderboard tick is owed, rescheduling
//! itself each time it fires. Still single-threaded and cooperative —
//! a busy host loop simply delays the tick, exactly as before.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickScheduler {
    interval: Duration,
    next_due: Option<Instant>,
}

impl TickScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Arm the scheduler: the first tick is owed one interval from
    /// `now`. Starting an already-running scheduler restarts the wait.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    /// Disarm. `due` never fires until `start` is called again.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Poll: has a tick come due? Fires at most once per call and
    /// reschedules the next tick one interval after `now` (not after
    /// the missed deadline), matching deferred-callback timers that
    /// re-arm when they run.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(deadline) if now >= deadline => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
