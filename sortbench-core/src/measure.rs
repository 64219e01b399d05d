//! Trial Timing
//!
//! Wall-clock timing for individual sort trials, built on the monotonic
//! `std::time::Instant` clock. One `Timer` spans exactly one trial: start
//! immediately before the sort call, stop immediately after.

use std::time::Instant;

/// Timer for measuring a single sort trial.
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer.
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Stop the timer and return elapsed nanoseconds.
    #[inline(always)]
    pub fn stop(&self) -> u64 {
        self.start.elapsed().as_nanos() as u64
    }
}
