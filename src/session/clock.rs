//! Wall-clock tracking for a puzzle session.
//!
//! `GameClock` accumulates play time across start/stop cycles so a session
//! can pause (on solve) without losing the elapsed total. Time only advances
//! while the clock is running, or when `advance` adds it directly.

use std::time::{Duration, Instant};

/// A stopwatch with an explicit accumulator.
///
/// The running segment is measured against a monotonic `Instant`; `stop`
/// folds it into the accumulator. `advance` feeds the accumulator directly,
/// which keeps time-dependent logic testable without sleeping.
#[derive(Clone, Debug)]
pub struct GameClock {
    /// Time folded in from finished running segments (and `advance` calls).
    accumulated: Duration,
    /// Start of the current running segment, if the clock is running.
    started_at: Option<Instant>,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl GameClock {
    /// Create a stopped clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            accumulated: Duration::ZERO,
            started_at: None,
        }
    }

    /// Start the clock. No effect if already running.
    pub fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    /// Stop the clock, folding the running segment into the total.
    /// No effect if already stopped.
    pub fn stop(&mut self) {
        if let Some(started) = self.started_at.take() {
            self.accumulated += started.elapsed();
        }
    }

    /// Reset to zero and stop.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.started_at = None;
    }

    /// Add time directly, bypassing the wall clock.
    ///
    /// Used by simulations and tests to move time deterministically.
    pub fn advance(&mut self, duration: Duration) {
        self.accumulated += duration;
    }

    /// Whether the clock is currently running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Total elapsed time, including the current running segment.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(started) => self.accumulated + started.elapsed(),
            None => self.accumulated,
        }
    }

    /// Total elapsed whole seconds.
    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }
}

/// Format a second count as `MM:SS`.
///
/// Both fields are zero-padded to two digits; the minutes field widens
/// past two digits rather than rolling over into hours.
#[must_use]
pub fn format_mm_ss(total_secs: u64) -> String {
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{minutes:02}:{seconds:02}")
}
