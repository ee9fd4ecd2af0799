//! Countdown timers for the active session.
//!
//! A `Countdown` is a deterministic state machine with no internal thread:
//! the host drives it by calling `tick()` once per elapsed second (a real
//! clock in production, manual ticks in tests). Starting a countdown always
//! cancels the previous one, so at most one decrement sequence is live per
//! timer instance.

/// Result of advancing a countdown by one second
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer is not running; nothing happened
    Idle,
    /// Timer decremented and is still running (seconds remaining)
    Running(u32),
    /// Timer reached zero on this tick and stopped itself
    Finished,
}

/// A second-granularity countdown timer
#[derive(Clone, Debug, Default)]
pub struct Countdown {
    remaining: u32,
    running: bool,
}

impl Countdown {
    /// Create an idle countdown
    pub fn idle() -> Self {
        Self::default()
    }

    /// Start (or restart) the countdown
    ///
    /// Replaces any running countdown: the old remaining time is discarded
    /// and the new duration takes effect immediately.
    pub fn start(&mut self, seconds: u32) {
        if self.running {
            tracing::debug!(
                old_remaining = self.remaining,
                new_duration = seconds,
                "replacing running countdown"
            );
        }
        self.remaining = seconds;
        self.running = seconds > 0;
    }

    /// Cancel the countdown, discarding any remaining time
    pub fn stop(&mut self) {
        self.remaining = 0;
        self.running = false;
    }

    /// Advance the countdown by one second
    ///
    /// At zero the countdown stops itself; there is no auto-repeat.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            TickOutcome::Finished
        } else {
            TickOutcome::Running(self.remaining)
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds remaining (0 when idle)
    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

/// Format a second count as "M:SS" with zero-padded seconds
///
/// `format_time(65)` yields `1:05`.
pub fn format_time(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{}:{:02}", mins, secs)
}
