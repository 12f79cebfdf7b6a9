// src/core/status.rs — Outcome kinds, their colors, and transient notifications.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Success,
    Error,
    Warning,
    Processing,
    Info,
}

/// 24-bit color, kept free of any rendering crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const GREEN: Rgb = Rgb(0x10, 0xb9, 0x81);
    pub const RED: Rgb = Rgb(0xef, 0x44, 0x44);
    pub const AMBER: Rgb = Rgb(0xf5, 0x9e, 0x0b);
    pub const INDIGO: Rgb = Rgb(0x63, 0x66, 0xf1);
    pub const GRAY: Rgb = Rgb(0x6b, 0x72, 0x80);

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl StatusKind {
    /// Color of the status indicator dot.
    pub fn indicator_color(&self) -> Rgb {
        match self {
            StatusKind::Success => Rgb::GREEN,
            StatusKind::Error => Rgb::RED,
            StatusKind::Warning => Rgb::AMBER,
            StatusKind::Processing => Rgb::INDIGO,
            StatusKind::Info => Rgb::GRAY,
        }
    }

    /// Background of a notification toast. Info and processing share indigo.
    pub fn notice_color(&self) -> Rgb {
        match self {
            StatusKind::Success => Rgb::GREEN,
            StatusKind::Error => Rgb::RED,
            StatusKind::Warning => Rgb::AMBER,
            StatusKind::Processing | StatusKind::Info => Rgb::INDIGO,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
            StatusKind::Warning => "warning",
            StatusKind::Processing => "processing",
            StatusKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: StatusKind,
    pub expires_at: Instant,
}

/// Toasts that dismiss themselves after a fixed time to live.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    ttl: Duration,
}

impl NotificationQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            ttl,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, kind: StatusKind, now: Instant) {
        self.items.push_back(Notification {
            message: message.into(),
            kind,
            expires_at: now + self.ttl,
        });
    }

    /// Drop everything whose time is up. Returns how many were dismissed.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        self.items.retain(|n| n.expires_at > now);
        before - self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
