//! Wall-clock sources for the frame loop.
//!
//! The engine never integrates absolute time. It asks its clock for a
//! timestamp each frame and subtracts the previous anchor, re-anchoring on
//! start and on resume so paused time is never turned into motion.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Source of monotonically non-decreasing timestamps, in seconds.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Real time measured from construction.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock for tests and headless runs.
///
/// Clones share the same time, so a caller can keep one handle and give the
/// other to the engine.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }

    pub fn set(&self, seconds: f64) {
        self.now.set(seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}
