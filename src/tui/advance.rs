//! One-shot deferred "next puzzle"
//!
//! The main loop is single-threaded, so the pending advance is just a
//! deadline checked on every tick. Cancelling clears it; dropping the app
//! drops it with nothing left running.

use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct AutoAdvance {
    scheduled: Option<(Instant, Duration)>,
}

impl AutoAdvance {
    /// Arm the timer, replacing any pending deadline
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        debug!(delay_ms = delay.as_millis() as u64, "auto-advance scheduled");
        self.scheduled = Some((now, delay));
    }

    /// Disarm the timer. Returns whether anything was pending.
    pub fn cancel(&mut self) -> bool {
        let pending = self.scheduled.take().is_some();
        if pending {
            debug!("auto-advance cancelled");
        }
        pending
    }

    pub fn is_pending(&self) -> bool {
        self.scheduled.is_some()
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.scheduled
            .map(|(start, delay)| (start + delay).saturating_duration_since(now))
    }

    /// Fraction of the delay already elapsed, for a countdown bar
    pub fn progress(&self, now: Instant) -> Option<f64> {
        self.scheduled.map(|(start, delay)| {
            if delay.is_zero() {
                1.0
            } else {
                (now.saturating_duration_since(start).as_secs_f64() / delay.as_secs_f64()).min(1.0)
            }
        })
    }

    /// True exactly once, on the first check at or after the deadline
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.scheduled {
            Some((start, delay)) if now >= start + delay => {
                self.scheduled = None;
                debug!("auto-advance fired");
                true
            }
            _ => false,
        }
    }
}
