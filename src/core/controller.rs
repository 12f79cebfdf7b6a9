// src/core/controller.rs — Dashboard controller: turns user actions, replies and
// streamed frames into visible updates.
//
// The controller never touches the network. `request_*` methods decide whether
// a call may go out and return it; whoever owns the network runs it and hands
// the `ApiReply` back to `finish`. A control with an outstanding request
// rejects further requests until its reply arrives.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, error, warn};

use crate::api::types::{EncodedFrame, FrameEvent, Snapshot, Stats, StatusReply, UploadReply};
use crate::api::{self, ApiCall, ApiReply, DetectionApi};
use crate::capture::{capture_file_name, FrameSink};
use crate::channel::ChannelEvent;
use crate::core::clock::{Clock, SystemClock};
use crate::core::fps::FrameRateMeter;
use crate::core::recent::recent_items;
use crate::core::session::SessionClock;
use crate::core::status::StatusKind;
use crate::core::upload::{validate_upload, UploadZone};
use crate::core::view::{ButtonState, ControlStates, ViewPort};
use crate::infra::config::UploadConfig;
use crate::infra::errors::DeckError;

pub const CLEAR_PROMPT: &str = "Are you sure you want to clear all detection data?";

/// Controls that can have a request in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Start,
    Stop,
    Clear,
    Upload,
    Refresh,
}

pub struct DashboardController<V: ViewPort, C: Clock = SystemClock> {
    view: V,
    clock: C,
    sink: Box<dyn FrameSink>,
    upload_config: UploadConfig,
    session: SessionClock,
    fps: FrameRateMeter,
    pending: HashSet<Control>,
    zone: UploadZone,
    awaiting_confirmation: bool,
    current_frame: Option<EncodedFrame>,
}

impl<V: ViewPort, C: Clock> DashboardController<V, C> {
    pub fn new(view: V, clock: C, sink: Box<dyn FrameSink>, upload_config: UploadConfig) -> Self {
        let fps = FrameRateMeter::new(clock.now());
        let mut controller = Self {
            view,
            clock,
            sink,
            upload_config,
            session: SessionClock::default(),
            fps,
            pending: HashSet::new(),
            zone: UploadZone::default(),
            awaiting_confirmation: false,
            current_frame: None,
        };
        controller.view.show_placeholder();
        controller.sync_controls();
        controller
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn session(&self) -> &SessionClock {
        &self.session
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    pub fn is_busy(&self, control: Control) -> bool {
        self.pending.contains(&control)
    }

    pub fn is_awaiting_confirmation(&self) -> bool {
        self.awaiting_confirmation
    }

    pub fn current_frame(&self) -> Option<&EncodedFrame> {
        self.current_frame.as_ref()
    }

    // ── Request side ─────────────────────────────────────────────

    pub fn request_start(&mut self) -> Option<ApiCall> {
        if self.session.is_running() {
            debug!("start ignored: already running");
            return None;
        }
        self.begin(Control::Start).then_some(ApiCall::Start)
    }

    pub fn request_stop(&mut self) -> Option<ApiCall> {
        if !self.session.is_running() {
            debug!("stop ignored: not running");
            return None;
        }
        self.begin(Control::Stop).then_some(ApiCall::Stop)
    }

    /// Ask the user to confirm. Nothing is sent until `confirm_clear(true)`.
    pub fn request_clear(&mut self) -> bool {
        if self.awaiting_confirmation || self.pending.contains(&Control::Clear) {
            return false;
        }
        self.awaiting_confirmation = true;
        self.view.set_confirmation(Some(CLEAR_PROMPT));
        true
    }

    pub fn confirm_clear(&mut self, confirmed: bool) -> Option<ApiCall> {
        if !self.awaiting_confirmation {
            return None;
        }
        self.awaiting_confirmation = false;
        self.view.set_confirmation(None);
        if !confirmed {
            debug!("clear cancelled");
            return None;
        }
        self.begin(Control::Clear).then_some(ApiCall::Clear)
    }

    pub fn request_upload(&mut self, path: &Path) -> Option<ApiCall> {
        if self.pending.contains(&Control::Upload) {
            debug!("upload ignored: previous upload outstanding");
            return None;
        }
        if let Err(e) = validate_upload(path, &self.upload_config) {
            warn!("{e}");
            let now = self.clock.now();
            self.view.notify(&e.to_string(), StatusKind::Error, now);
            return None;
        }
        self.begin(Control::Upload);
        self.view
            .set_status("Processing image...", StatusKind::Processing);
        Some(ApiCall::Upload {
            path: path.to_path_buf(),
            max_bytes: self.upload_config.max_bytes,
        })
    }

    pub fn request_refresh(&mut self) -> Option<ApiCall> {
        self.begin(Control::Refresh).then_some(ApiCall::Refresh)
    }

    // ── Upload zone ──────────────────────────────────────────────

    pub fn drag_over(&mut self) {
        self.zone.drag_over();
        self.view.set_upload_highlight(true);
    }

    pub fn drag_leave(&mut self) {
        self.zone.drag_leave();
        self.view.set_upload_highlight(false);
    }

    pub fn drop_files(&mut self, paths: &[PathBuf]) -> Option<ApiCall> {
        let picked = self.zone.drop(paths);
        self.view.set_upload_highlight(false);
        picked.and_then(|path| self.request_upload(&path))
    }

    pub fn is_upload_highlighted(&self) -> bool {
        self.zone.is_highlighted()
    }

    // ── Reply side ───────────────────────────────────────────────

    pub fn finish(&mut self, reply: ApiReply) {
        match reply {
            ApiReply::Start(result) => self.finish_start(result),
            ApiReply::Stop(result) => self.finish_stop(result),
            ApiReply::Clear(result) => self.finish_clear(result),
            ApiReply::Upload(result) => self.finish_upload(result),
            ApiReply::Refresh(result) => self.finish_refresh(result),
        }
    }

    /// Send `call` (if any) and apply its reply before returning.
    pub async fn perform(&mut self, api: &dyn DetectionApi, call: Option<ApiCall>) {
        if let Some(call) = call {
            let reply = api::execute(api, call).await;
            self.finish(reply);
        }
    }

    fn finish_start(&mut self, result: Result<StatusReply, DeckError>) {
        match result {
            Ok(reply) if reply.is_running() => {
                self.session.start(self.clock.wall());
                self.fps = FrameRateMeter::new(self.clock.now());
                self.view.set_status("Detecting...", StatusKind::Success);
                self.view.show_live();
            }
            Ok(reply) => warn!("start not acknowledged: status {:?}", reply.status),
            Err(e) => {
                self.report_failure("Error starting detection", &e);
                self.view
                    .set_status("Error starting detection", StatusKind::Error);
            }
        }
        self.end(Control::Start);
    }

    fn finish_stop(&mut self, result: Result<StatusReply, DeckError>) {
        match result {
            Ok(reply) if reply.is_stopped() => {
                self.session.stop();
                self.view.set_status("Stopped", StatusKind::Warning);
                self.view.show_placeholder();
            }
            Ok(reply) => warn!("stop not acknowledged: status {:?}", reply.status),
            Err(e) => self.report_failure("Error stopping detection", &e),
        }
        self.end(Control::Stop);
    }

    fn finish_clear(&mut self, result: Result<StatusReply, DeckError>) {
        match result {
            Ok(reply) if reply.is_cleared() => {
                self.view.set_total_objects("0");
                self.view.set_recent(&[]);
                self.view.set_distribution(&[], &[]);
                let now = self.clock.now();
                self.view
                    .notify("Data cleared successfully!", StatusKind::Success, now);
            }
            Ok(reply) => warn!("clear not acknowledged: status {:?}", reply.status),
            Err(e) => self.report_failure("Error clearing data", &e),
        }
        self.end(Control::Clear);
    }

    fn finish_upload(&mut self, result: Result<UploadReply, DeckError>) {
        let now = self.clock.now();
        match result {
            Ok(UploadReply {
                frame: Some(frame),
                detections,
                count,
                ..
            }) => {
                self.view.show_frame(&frame);
                self.view.show_live();
                self.current_frame = Some(frame);

                match detections.filter(|d| !d.is_empty()) {
                    Some(found) => {
                        self.view.set_recent(&recent_items(&found));
                        let n = count.unwrap_or(found.len() as u64);
                        self.view.notify(
                            &format!("Found {n} objects in image!"),
                            StatusKind::Success,
                            now,
                        );
                    }
                    None => {
                        self.view
                            .notify("No objects detected in image", StatusKind::Info, now);
                    }
                }
                self.view.set_status("Image processed", StatusKind::Success);
            }
            Ok(UploadReply {
                error: Some(message),
                ..
            }) => {
                warn!("Server rejected upload: {message}");
                self.view.notify(&message, StatusKind::Error, now);
                self.view
                    .set_status("Error processing image", StatusKind::Error);
            }
            Ok(_) => warn!("upload reply carried neither frame nor error"),
            Err(e @ (DeckError::Backend(_) | DeckError::Rejected(_))) => {
                self.report_failure("Error uploading file", &e);
                self.view.set_status("Upload failed", StatusKind::Error);
            }
            Err(e) => {
                error!("Error uploading file: {e}");
                self.view
                    .notify("Error uploading file", StatusKind::Error, now);
                self.view.set_status("Upload failed", StatusKind::Error);
            }
        }
        self.end(Control::Upload);
    }

    fn finish_refresh(&mut self, result: Result<Snapshot, DeckError>) {
        match result {
            Ok(snapshot) => {
                self.apply_stats(&snapshot.stats);
                self.view.set_log(&snapshot.logs);
            }
            Err(e) => warn!("Statistics refresh failed: {e}"),
        }
        self.end(Control::Refresh);
    }

    /// Backend and client-side rejections carry a message meant for the
    /// user; transport failures only go to the log.
    fn report_failure(&mut self, context: &str, e: &DeckError) {
        match e {
            DeckError::Backend(message) | DeckError::Rejected(message) => {
                warn!("{context}: {message}");
                let now = self.clock.now();
                self.view.notify(message, StatusKind::Error, now);
            }
            _ => error!("{context}: {e}"),
        }
    }

    // ── Local operations ─────────────────────────────────────────

    /// Save the frame on screen. Only while running and once a frame exists.
    pub fn capture_frame(&mut self) -> Option<PathBuf> {
        if !self.session.is_running() {
            debug!("capture ignored: not running");
            return None;
        }
        let frame = self.current_frame.as_ref()?;
        let now = self.clock.now();
        let name = capture_file_name(self.clock.wall());
        let saved = frame
            .decode()
            .and_then(|bytes| self.sink.save(&name, &bytes));
        match saved {
            Ok(path) => {
                self.view
                    .notify("Frame captured successfully!", StatusKind::Success, now);
                Some(path)
            }
            Err(e) => {
                warn!("Capture failed: {e}");
                self.view
                    .notify(&format!("Capture failed: {e}"), StatusKind::Error, now);
                None
            }
        }
    }

    pub fn handle_channel_event(&mut self, event: ChannelEvent) {
        match event {
            ChannelEvent::Connected => {
                tracing::info!("Connected to server");
                self.view.set_status("Connected", StatusKind::Success);
            }
            ChannelEvent::Disconnected => {
                tracing::info!("Disconnected from server");
                self.view.set_status("Disconnected", StatusKind::Error);
            }
            ChannelEvent::Frame(frame) => self.handle_frame(*frame),
        }
    }

    pub fn handle_frame(&mut self, event: FrameEvent) {
        self.view.show_frame(&event.frame);
        self.current_frame = Some(event.frame);

        if let Some(fps) = self.fps.record(self.clock.now()) {
            self.view.set_fps(fps);
        }
        if let Some(n) = event.frame_count {
            self.view.set_frame_number(n);
        }
        if let Some(detections) = event.detections.as_deref() {
            if !detections.is_empty() {
                self.view.set_recent(&recent_items(detections));
            }
        }
        if let Some(stats) = &event.stats {
            self.apply_stats(stats);
        }
    }

    /// Once-per-second housekeeping: session time and toast expiry.
    pub fn tick(&mut self) {
        if let Some(text) = self.session.elapsed_display(self.clock.wall()) {
            self.view.set_session_time(&text);
        }
        self.view.expire_notifications(self.clock.now());
    }

    fn apply_stats(&mut self, stats: &Stats) {
        if let Some(total) = stats.total_detections {
            self.view.set_total_objects(&total.to_string());
        }
        if let Some(dist) = &stats.class_statistics {
            self.view.set_distribution(&dist.labels(), &dist.counts());
        }
    }

    // ── Control bookkeeping ──────────────────────────────────────

    fn begin(&mut self, control: Control) -> bool {
        if !self.pending.insert(control) {
            debug!("{control:?} ignored: request outstanding");
            return false;
        }
        self.sync_controls();
        true
    }

    fn end(&mut self, control: Control) {
        self.pending.remove(&control);
        self.sync_controls();
    }

    fn sync_controls(&mut self) {
        let running = self.session.is_running();
        let busy = |c: Control| self.pending.contains(&c);
        let states = ControlStates {
            start: ButtonState {
                enabled: !running && !busy(Control::Start),
                busy: busy(Control::Start),
            },
            stop: ButtonState {
                enabled: running && !busy(Control::Stop),
                busy: busy(Control::Stop),
            },
            capture: ButtonState {
                enabled: running,
                busy: false,
            },
            clear: ButtonState {
                enabled: !busy(Control::Clear),
                busy: busy(Control::Clear),
            },
            upload: ButtonState {
                enabled: !busy(Control::Upload),
                busy: busy(Control::Upload),
            },
            start_label: if running { "Running" } else { "Start Detection" },
        };
        self.view.set_controls(&states);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Detection;
    use crate::core::clock::ManualClock;
    use crate::core::recent::RecentItem;
    use std::time::Instant;

    #[derive(Default)]
    struct Recorder {
        status: Option<(String, StatusKind)>,
        notices: Vec<(String, StatusKind)>,
        live: bool,
        fps: Option<u32>,
        recent: Vec<RecentItem>,
        total: Option<String>,
        labels: Vec<String>,
        counts: Vec<u64>,
        session_time: Option<String>,
        controls: ControlStates,
        highlight: bool,
        confirmation: Option<String>,
    }

    impl ViewPort for Recorder {
        fn show_placeholder(&mut self) {
            self.live = false;
        }
        fn show_live(&mut self) {
            self.live = true;
        }
        fn show_frame(&mut self, _frame: &EncodedFrame) {}
        fn set_status(&mut self, text: &str, kind: StatusKind) {
            self.status = Some((text.to_string(), kind));
        }
        fn notify(&mut self, message: &str, kind: StatusKind, _at: Instant) {
            self.notices.push((message.to_string(), kind));
        }
        fn set_total_objects(&mut self, total: &str) {
            self.total = Some(total.to_string());
        }
        fn set_fps(&mut self, fps: u32) {
            self.fps = Some(fps);
        }
        fn set_session_time(&mut self, text: &str) {
            self.session_time = Some(text.to_string());
        }
        fn set_recent(&mut self, items: &[RecentItem]) {
            self.recent = items.to_vec();
        }
        fn set_distribution(&mut self, labels: &[String], counts: &[u64]) {
            self.labels = labels.to_vec();
            self.counts = counts.to_vec();
        }
        fn set_controls(&mut self, controls: &ControlStates) {
            self.controls = controls.clone();
        }
        fn set_upload_highlight(&mut self, on: bool) {
            self.highlight = on;
        }
        fn set_confirmation(&mut self, prompt: Option<&str>) {
            self.confirmation = prompt.map(str::to_string);
        }
    }

    struct NullSink;

    impl FrameSink for NullSink {
        fn save(&mut self, name: &str, _jpeg: &[u8]) -> Result<PathBuf, DeckError> {
            Ok(PathBuf::from(name))
        }
    }

    fn controller() -> (DashboardController<Recorder, ManualClock>, ManualClock) {
        let clock = ManualClock::default();
        let c = DashboardController::new(
            Recorder::default(),
            clock.clone(),
            Box::new(NullSink),
            UploadConfig::default(),
        );
        (c, clock)
    }

    fn started(c: &mut DashboardController<Recorder, ManualClock>) {
        let call = c.request_start();
        assert_eq!(call, Some(ApiCall::Start));
        c.finish(ApiReply::Start(Ok(StatusReply::new("started"))));
    }

    fn frame(detections: Option<Vec<Detection>>) -> FrameEvent {
        FrameEvent {
            frame: EncodedFrame::encode(b"\xff\xd8\xff"),
            detections,
            stats: None,
            frame_count: None,
        }
    }

    #[test]
    fn test_initial_controls() {
        let (c, _) = controller();
        let ctl = &c.view().controls;
        assert!(ctl.start.enabled);
        assert!(!ctl.stop.enabled);
        assert!(!ctl.capture.enabled);
        assert_eq!(ctl.start_label, "Start Detection");
        assert!(!c.view().live);
    }

    #[test]
    fn test_start_success_transitions_to_running() {
        let (mut c, _) = controller();
        started(&mut c);
        assert!(c.is_running());
        assert!(c.view().live);
        assert_eq!(
            c.view().status,
            Some(("Detecting...".into(), StatusKind::Success))
        );
        assert!(!c.view().controls.start.enabled);
        assert!(c.view().controls.stop.enabled);
        assert!(c.view().controls.capture.enabled);
        assert_eq!(c.view().controls.start_label, "Running");
    }

    #[test]
    fn test_start_already_running_is_idempotent() {
        let (mut c, _) = controller();
        c.request_start();
        c.finish(ApiReply::Start(Ok(StatusReply::new("already_running"))));
        assert!(c.is_running());
        assert!(c.session().started_at().is_some());
    }

    #[test]
    fn test_start_transport_error_leaves_stopped() {
        let (mut c, _) = controller();
        c.request_start();
        c.finish(ApiReply::Start(Err(DeckError::Channel("refused".into()))));
        assert!(!c.is_running());
        assert_eq!(
            c.view().status,
            Some(("Error starting detection".into(), StatusKind::Error))
        );
        assert!(!c.is_busy(Control::Start));
        assert!(c.view().controls.start.enabled);
    }

    #[test]
    fn test_backend_error_on_start_is_notified() {
        let (mut c, _) = controller();
        c.request_start();
        c.finish(ApiReply::Start(Err(DeckError::Backend("Camera busy".into()))));
        assert!(!c.is_running());
        assert_eq!(
            c.view().notices,
            vec![("Camera busy".to_string(), StatusKind::Error)]
        );
    }

    #[test]
    fn test_transport_error_on_clear_is_not_notified() {
        let (mut c, _) = controller();
        c.request_clear();
        let call = c.confirm_clear(true);
        assert_eq!(call, Some(ApiCall::Clear));
        c.finish(ApiReply::Clear(Err(DeckError::Channel("reset".into()))));
        assert!(c.view().notices.is_empty());
        assert!(!c.is_busy(Control::Clear));
    }

    #[test]
    fn test_double_start_rejected_while_outstanding() {
        let (mut c, _) = controller();
        assert!(c.request_start().is_some());
        assert!(c.view().controls.start.busy);
        assert!(!c.view().controls.start.enabled);
        assert_eq!(c.request_start(), None);
    }

    #[test]
    fn test_stop_reverts_to_placeholder() {
        let (mut c, _) = controller();
        started(&mut c);
        assert_eq!(c.request_stop(), Some(ApiCall::Stop));
        c.finish(ApiReply::Stop(Ok(StatusReply::new("stopped"))));
        assert!(!c.is_running());
        assert!(!c.view().live);
        assert_eq!(c.view().status, Some(("Stopped".into(), StatusKind::Warning)));
    }

    #[test]
    fn test_stop_error_leaves_state_unchanged() {
        let (mut c, _) = controller();
        started(&mut c);
        c.request_stop();
        c.finish(ApiReply::Stop(Err(DeckError::Channel("reset".into()))));
        assert!(c.is_running());
        assert!(c.view().live);
        assert!(!c.is_busy(Control::Stop));
    }

    #[test]
    fn test_stop_ignored_when_not_running() {
        let (mut c, _) = controller();
        assert_eq!(c.request_stop(), None);
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let (mut c, _) = controller();
        assert!(c.request_clear());
        assert_eq!(c.view().confirmation.as_deref(), Some(CLEAR_PROMPT));
        assert_eq!(c.confirm_clear(false), None);
        assert!(c.view().confirmation.is_none());
        // answering again without a question does nothing
        assert_eq!(c.confirm_clear(true), None);
    }

    #[test]
    fn test_clear_resets_counters_and_chart() {
        let (mut c, _) = controller();
        let mut ev = frame(Some(vec![Detection::new("person", 0.9)]));
        ev.stats = serde_json::from_str(
            r#"{"total_detections": 42, "class_statistics": {"person": {"count": 42}}}"#,
        )
        .ok();
        c.handle_frame(ev);
        assert_eq!(c.view().total.as_deref(), Some("42"));

        c.request_clear();
        assert_eq!(c.confirm_clear(true), Some(ApiCall::Clear));
        c.finish(ApiReply::Clear(Ok(StatusReply::new("cleared"))));
        assert_eq!(c.view().total.as_deref(), Some("0"));
        assert!(c.view().recent.is_empty());
        assert!(c.view().labels.is_empty());
        assert!(c.view().counts.is_empty());
        assert_eq!(
            c.view().notices.last(),
            Some(&("Data cleared successfully!".into(), StatusKind::Success))
        );
    }

    #[test]
    fn test_frame_updates_recent_and_fps() {
        let (mut c, clock) = controller();
        let dets: Vec<_> = (0..7)
            .map(|i| Detection::new(format!("c{i}"), 0.5 + i as f64 / 100.0))
            .collect();
        for _ in 0..4 {
            clock.advance_ms(250);
            c.handle_frame(frame(Some(dets.clone())));
        }
        assert_eq!(c.view().fps, Some(4));
        assert_eq!(c.view().recent.len(), 5);
        assert_eq!(c.view().recent[0].class, "c6");
        assert_eq!(c.view().recent[0].confidence, "56.0%");
    }

    #[test]
    fn test_frame_with_empty_detections_keeps_recent() {
        let (mut c, _) = controller();
        c.handle_frame(frame(Some(vec![Detection::new("dog", 0.77)])));
        c.handle_frame(frame(Some(vec![])));
        c.handle_frame(frame(None));
        assert_eq!(c.view().recent.len(), 1);
        assert_eq!(c.view().recent[0].class, "dog");
    }

    #[test]
    fn test_tick_noop_before_start() {
        let (mut c, clock) = controller();
        clock.advance_ms(5_000);
        c.tick();
        assert!(c.view().session_time.is_none());
    }

    #[test]
    fn test_tick_renders_elapsed() {
        let (mut c, clock) = controller();
        started(&mut c);
        clock.advance_ms(3_661_000);
        c.tick();
        assert_eq!(c.view().session_time.as_deref(), Some("01:01:01"));
    }

    #[test]
    fn test_capture_requires_running_and_frame() {
        let (mut c, _) = controller();
        c.handle_frame(frame(None));
        assert_eq!(c.capture_frame(), None);
        started(&mut c);
        let path = c.capture_frame().unwrap();
        assert!(path.to_string_lossy().starts_with("detection_"));
        assert_eq!(
            c.view().notices.last().map(|n| n.1),
            Some(StatusKind::Success)
        );
    }

    #[test]
    fn test_drag_leave_without_drop_never_uploads() {
        let (mut c, _) = controller();
        c.drag_over();
        assert!(c.view().highlight);
        c.drag_leave();
        assert!(!c.view().highlight);
        assert!(!c.is_busy(Control::Upload));
    }

    #[test]
    fn test_upload_empty_detections_is_info() {
        let (mut c, _) = controller();
        c.finish(ApiReply::Upload(Ok(UploadReply {
            frame: Some(EncodedFrame::encode(b"jpg")),
            detections: Some(vec![]),
            count: Some(0),
            error: None,
        })));
        assert_eq!(
            c.view().notices.last(),
            Some(&("No objects detected in image".into(), StatusKind::Info))
        );
        assert!(c.view().recent.is_empty());
        assert!(c.view().live);
    }

    #[test]
    fn test_upload_error_payload_surfaces_message() {
        let (mut c, _) = controller();
        c.finish(ApiReply::Upload(Ok(UploadReply {
            error: Some("Unsupported file type".into()),
            ..UploadReply::default()
        })));
        assert_eq!(
            c.view().notices.last(),
            Some(&("Unsupported file type".into(), StatusKind::Error))
        );
        assert_eq!(
            c.view().status,
            Some(("Error processing image".into(), StatusKind::Error))
        );
    }

    #[test]
    fn test_channel_lifecycle_status() {
        let (mut c, _) = controller();
        c.handle_channel_event(ChannelEvent::Connected);
        assert_eq!(c.view().status, Some(("Connected".into(), StatusKind::Success)));
        c.handle_channel_event(ChannelEvent::Disconnected);
        assert_eq!(c.view().status, Some(("Disconnected".into(), StatusKind::Error)));
    }
}
