//! Round countdown timer.
//!
//! Counts down from a configured limit while running. Expiry is a one-shot
//! transition: the first tick that drives `remaining` to zero reports
//! [`TimerTick::Expired`], stops the timer, and leaves it inert until the
//! next [`reset`](RoundTimer::reset).

use serde::{Deserialize, Serialize};

/// Lower bound on the countdown ceiling.
///
/// Configuration rejects non-positive limits before the timer ever sees
/// them; the clamp keeps the progress fraction well-defined regardless.
pub const MIN_TIME_LIMIT_SECS: f32 = 1.0;

/// Result of advancing the timer by one frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TimerTick {
    /// Timer is paused, unconfigured, or already expired.
    Idle,

    /// Timer is counting down. `progress` is `remaining / limit` in `[0, 1]`,
    /// ready to drive a fill-bar display.
    Running { progress: f32 },

    /// `remaining` reached zero on this tick. Reported exactly once per reset.
    Expired,
}

/// Countdown clock with pause/resume and one-shot expiry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundTimer {
    limit: f32,
    remaining: f32,
    running: bool,
    finished: bool,
}

impl RoundTimer {
    /// Create a stopped timer. Call [`configure`](Self::configure) and
    /// [`reset`](Self::reset) before use.
    #[must_use]
    pub fn new() -> Self {
        Self {
            limit: MIN_TIME_LIMIT_SECS,
            remaining: 0.0,
            running: false,
            finished: false,
        }
    }

    /// Set the countdown ceiling for the next reset.
    ///
    /// Limits below [`MIN_TIME_LIMIT_SECS`] are clamped up.
    pub fn configure(&mut self, limit_secs: f32) {
        self.limit = limit_secs.max(MIN_TIME_LIMIT_SECS);
    }

    /// Restart the countdown from the full limit.
    ///
    /// Safe to call at any point; each call restarts the countdown and
    /// clears the expired state.
    pub fn reset(&mut self) {
        self.remaining = self.limit;
        self.running = true;
        self.finished = false;
    }

    /// Stop counting down without touching `remaining`. No-op if already
    /// paused.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Resume counting down. No-op if already running or expired.
    pub fn resume(&mut self) {
        if !self.finished {
            self.running = true;
        }
    }

    /// Whether the timer is currently counting down.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.running
    }

    /// Whether the countdown has expired since the last reset.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Seconds left on the clock.
    #[must_use]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// The configured countdown ceiling.
    #[must_use]
    pub fn limit(&self) -> f32 {
        self.limit
    }

    /// Advance the countdown by `dt` seconds.
    ///
    /// While running, subtracts `dt` (clamped at zero). The tick that reaches
    /// zero reports [`TimerTick::Expired`], stops the timer, and marks it
    /// finished; every later tick reports [`TimerTick::Idle`] until reset.
    pub fn tick(&mut self, dt: f32) -> TimerTick {
        if !self.running || self.finished {
            return TimerTick::Idle;
        }

        self.remaining = (self.remaining - dt).max(0.0);
        if self.remaining == 0.0 {
            self.running = false;
            self.finished = true;
            TimerTick::Expired
        } else {
            TimerTick::Running {
                progress: self.remaining / self.limit,
            }
        }
    }
}

impl Default for RoundTimer {
    fn default() -> Self {
        Self::new()
    }
}
