// src/core/view.rs — The capability through which the controller changes what is visible.

use std::time::Instant;

use crate::api::types::{Detection, EncodedFrame};
use crate::core::recent::RecentItem;
use crate::core::status::StatusKind;

/// Enabled/busy state of one control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub enabled: bool,
    /// A request for this control is outstanding.
    pub busy: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlStates {
    pub start: ButtonState,
    pub stop: ButtonState,
    pub capture: ButtonState,
    pub clear: ButtonState,
    pub upload: ButtonState,
    pub start_label: &'static str,
}

/// Every visible update the controller can make. Implemented by the
/// terminal UI, the console printer, and test recorders.
pub trait ViewPort {
    /// Hide the feed and show the idle placeholder.
    fn show_placeholder(&mut self);

    /// Hide the placeholder and show the feed.
    fn show_live(&mut self);

    /// Replace the feed's image source.
    fn show_frame(&mut self, frame: &EncodedFrame);

    fn set_status(&mut self, text: &str, kind: StatusKind);

    /// Transient toast that disappears on its own.
    fn notify(&mut self, message: &str, kind: StatusKind, at: Instant);

    /// Remove toasts whose time is up.
    fn expire_notifications(&mut self, _now: Instant) {}

    fn set_total_objects(&mut self, total: &str);

    fn set_fps(&mut self, fps: u32);

    fn set_session_time(&mut self, text: &str);

    /// Server-side frame number, when the backend sends one.
    fn set_frame_number(&mut self, _frame: u64) {}

    fn set_recent(&mut self, items: &[RecentItem]);

    /// Replace the distribution chart's data set wholesale.
    fn set_distribution(&mut self, labels: &[String], counts: &[u64]);

    fn set_log(&mut self, _entries: &[Detection]) {}

    fn set_controls(&mut self, controls: &ControlStates);

    fn set_upload_highlight(&mut self, on: bool);

    /// Show (`Some`) or withdraw (`None`) a yes/no question.
    fn set_confirmation(&mut self, prompt: Option<&str>);
}
