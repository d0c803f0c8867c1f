//! Injectable time source.
//!
//! Price stamps and seed generation read the current time through [`Clock`]
//! so tests can pin or advance it deterministically. Blocking delays go
//! through [`Scheduler`] for the same reason.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current += by;
    }

    pub fn set(&self, to: DateTime<Utc>) {
        *self.current.lock().unwrap_or_else(|e| e.into_inner()) = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Drives the simulated latency of blocking operations.
pub trait Scheduler: Send + Sync {
    fn sleep(&self, delay: std::time::Duration);
}

/// Blocks the current thread for the requested delay.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Scheduler for ThreadSleeper {
    fn sleep(&self, delay: std::time::Duration) {
        std::thread::sleep(delay);
    }
}

// A manual clock "sleeps" by jumping forward, so simulated delays cost nothing.
impl Scheduler for ManualClock {
    fn sleep(&self, delay: std::time::Duration) {
        self.advance(Duration::from_std(delay).unwrap_or_else(|_| Duration::zero()));
    }
}
