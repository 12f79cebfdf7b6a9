// src/core/clock.rs — Time source injected into the controller.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

pub trait Clock {
    /// Monotonic time, used for frame-rate windows.
    fn now(&self) -> Instant;

    /// Wall-clock time, used for session start and capture names.
    fn wall(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn wall(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    inner: Arc<Mutex<(Instant, DateTime<Utc>)>>,
}

impl ManualClock {
    pub fn new(wall: DateTime<Utc>) -> Self {
        Self {
            inner: Arc::new(Mutex::new((Instant::now(), wall))),
        }
    }

    pub fn advance(&self, by: Duration) {
        if let Ok(mut t) = self.inner.lock() {
            t.0 += by;
            t.1 += chrono::Duration::from_std(by).unwrap_or_else(|_| chrono::Duration::zero());
        }
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.inner.lock().map(|t| t.0).unwrap_or_else(|_| Instant::now())
    }

    fn wall(&self) -> DateTime<Utc> {
        self.inner.lock().map(|t| t.1).unwrap_or_else(|_| Utc::now())
    }
}
