// src/core/fps.rs — Frames-per-second estimate over one-second windows.

use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct FrameRateMeter {
    count: u32,
    window_start: Instant,
}

impl FrameRateMeter {
    pub fn new(now: Instant) -> Self {
        Self {
            count: 0,
            window_start: now,
        }
    }

    /// Count one frame. Returns a fresh estimate once the window has run
    /// for at least a second, then starts a new window at `now`.
    pub fn record(&mut self, now: Instant) -> Option<u32> {
        self.count += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < WINDOW {
            return None;
        }
        let elapsed_ms = elapsed.as_millis() as f64;
        let fps = (self.count as f64 * 1000.0 / elapsed_ms).round() as u32;
        self.count = 0;
        self.window_start = now;
        Some(fps)
    }
}
