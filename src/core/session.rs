// src/core/session.rs — Session state and elapsed-time formatting.

use chrono::{DateTime, Utc};

/// Running flag plus the wall time of the last successful start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionClock {
    running: bool,
    started_at: Option<DateTime<Utc>>,
}

impl SessionClock {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn start(&mut self, at: DateTime<Utc>) {
        self.running = true;
        self.started_at = Some(at);
    }

    /// The start timestamp survives a stop; the display keeps counting
    /// from the last start until the next one.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// `HH:MM:SS` since the last start, or `None` if never started.
    pub fn elapsed_display(&self, now: DateTime<Utc>) -> Option<String> {
        let started = self.started_at?;
        let ms = (now - started).num_milliseconds().max(0) as u64;
        Some(format_elapsed_ms(ms))
    }
}

/// Zero-padded `HH:MM:SS`. Hours grow past two digits rather than wrap.
pub fn format_elapsed_ms(elapsed_ms: u64) -> String {
    let hours = elapsed_ms / 3_600_000;
    let minutes = (elapsed_ms % 3_600_000) / 60_000;
    let seconds = (elapsed_ms % 60_000) / 1_000;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
