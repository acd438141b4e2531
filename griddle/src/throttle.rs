//! Leading-and-trailing-edge rate limiter.
//!
//! Scroll events can arrive far faster than the edge flags need to be
//! recomputed. The throttle lets at most one evaluation through per window,
//! but guarantees both the first event (leading edge) and the final resting
//! position (trailing edge) are reflected.

use std::time::{Duration, Instant};

/// A throttle window with guaranteed leading and trailing evaluation.
///
/// Call [`accept`](Throttle::accept) when an event arrives; if it returns
/// true, evaluate immediately. Events suppressed inside the window set a
/// pending flag; poll [`flush`](Throttle::flush) (e.g. once per frame) and
/// evaluate again when it returns true.
#[derive(Debug, Clone)]
pub struct Throttle {
    window: Duration,
    last_fire: Option<Instant>,
    pending: bool,
}

impl Throttle {
    /// Create a throttle with the given window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_fire: None,
            pending: false,
        }
    }

    /// Register an event at `now`. Returns true if it should be evaluated
    /// immediately (leading edge); otherwise a trailing evaluation is
    /// scheduled.
    pub fn accept(&mut self, now: Instant) -> bool {
        match self.last_fire {
            Some(last) if now.duration_since(last) < self.window => {
                self.pending = true;
                false
            }
            _ => {
                self.last_fire = Some(now);
                self.pending = false;
                true
            }
        }
    }

    /// Poll for a due trailing evaluation. Returns true at most once per
    /// suppressed burst, after the window has elapsed.
    pub fn flush(&mut self, now: Instant) -> bool {
        if !self.pending {
            return false;
        }
        match self.last_fire {
            Some(last) if now.duration_since(last) >= self.window => {
                self.last_fire = Some(now);
                self.pending = false;
                true
            }
            None => {
                self.last_fire = Some(now);
                self.pending = false;
                true
            }
            _ => false,
        }
    }

    /// When the pending trailing evaluation becomes due, if one is scheduled.
    /// Event loops can use this to size their poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        if !self.pending {
            return None;
        }
        Some(match self.last_fire {
            Some(last) => last + self.window,
            None => Instant::now(),
        })
    }
}
