// src/tui/view.rs — Display state the widgets draw from; the terminal's ViewPort.

use std::time::{Duration, Instant};

use image::RgbImage;

use crate::api::types::{Detection, EncodedFrame};
use crate::core::recent::RecentItem;
use crate::core::status::{NotificationQueue, StatusKind};
use crate::core::view::{ControlStates, ViewPort};

use super::frame_render;

pub struct ViewState {
    pub feed_visible: bool,
    pub frame: Option<RgbImage>,
    pub frame_error: Option<String>,
    pub frames_received: u64,
    pub frame_number: Option<u64>,
    pub status_text: String,
    pub status_kind: StatusKind,
    pub notifications: NotificationQueue,
    pub total_objects: String,
    pub fps: u32,
    pub session_time: String,
    pub recent: Vec<RecentItem>,
    pub labels: Vec<String>,
    pub counts: Vec<u64>,
    pub log: Vec<Detection>,
    pub controls: ControlStates,
    pub upload_highlight: bool,
    pub confirmation: Option<String>,
    render_frames: bool,
}

impl ViewState {
    pub fn new(notification_ttl: Duration, render_frames: bool) -> Self {
        Self {
            feed_visible: false,
            frame: None,
            frame_error: None,
            frames_received: 0,
            frame_number: None,
            status_text: "Connecting...".into(),
            status_kind: StatusKind::Info,
            notifications: NotificationQueue::new(notification_ttl),
            total_objects: "0".into(),
            fps: 0,
            session_time: "00:00:00".into(),
            recent: Vec::new(),
            labels: Vec::new(),
            counts: Vec::new(),
            log: Vec::new(),
            controls: ControlStates::default(),
            upload_highlight: false,
            confirmation: None,
            render_frames,
        }
    }

    /// Class/count pairs as the chart draws them.
    pub fn distribution(&self) -> impl Iterator<Item = (&str, u64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().copied())
    }
}

impl ViewPort for ViewState {
    fn show_placeholder(&mut self) {
        self.feed_visible = false;
    }

    fn show_live(&mut self) {
        self.feed_visible = true;
    }

    fn show_frame(&mut self, frame: &EncodedFrame) {
        self.frames_received += 1;
        if !self.render_frames {
            return;
        }
        match frame_render::decode_frame(frame) {
            Ok(img) => {
                self.frame = Some(img);
                self.frame_error = None;
            }
            Err(e) => {
                tracing::debug!("Frame not renderable: {e}");
                self.frame_error = Some(e.to_string());
            }
        }
    }

    fn set_status(&mut self, text: &str, kind: StatusKind) {
        self.status_text = text.to_string();
        self.status_kind = kind;
    }

    fn notify(&mut self, message: &str, kind: StatusKind, at: Instant) {
        self.notifications.push(message, kind, at);
    }

    fn expire_notifications(&mut self, now: Instant) {
        self.notifications.prune(now);
    }

    fn set_total_objects(&mut self, total: &str) {
        self.total_objects = total.to_string();
    }

    fn set_fps(&mut self, fps: u32) {
        self.fps = fps;
    }

    fn set_session_time(&mut self, text: &str) {
        self.session_time = text.to_string();
    }

    fn set_frame_number(&mut self, frame: u64) {
        self.frame_number = Some(frame);
    }

    fn set_recent(&mut self, items: &[RecentItem]) {
        self.recent = items.to_vec();
    }

    fn set_distribution(&mut self, labels: &[String], counts: &[u64]) {
        self.labels = labels.to_vec();
        self.counts = counts.to_vec();
    }

    fn set_log(&mut self, entries: &[Detection]) {
        self.log = entries.to_vec();
    }

    fn set_controls(&mut self, controls: &ControlStates) {
        self.controls = controls.clone();
    }

    fn set_upload_highlight(&mut self, on: bool) {
        self.upload_highlight = on;
    }

    fn set_confirmation(&mut self, prompt: Option<&str>) {
        self.confirmation = prompt.map(str::to_string);
    }
}
