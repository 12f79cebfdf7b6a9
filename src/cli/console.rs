// src/cli/console.rs — Line-oriented ViewPort for the headless commands.
//
// Status changes and notifications are written as they happen. Counters,
// the distribution and the log are kept so the command can print a summary.

use std::io::{self, Write};
use std::time::Instant;

use crate::api::types::{Detection, EncodedFrame};
use crate::core::recent::{format_confidence, RecentItem};
use crate::core::status::StatusKind;
use crate::core::view::{ControlStates, ViewPort};

pub struct ConsoleView<W: Write = io::Stderr> {
    out: W,
    pub status: Option<(String, StatusKind)>,
    pub total_objects: Option<String>,
    pub distribution: Vec<(String, u64)>,
    pub recent: Vec<RecentItem>,
    pub log: Vec<Detection>,
    pub frames: u64,
    pub frame_number: Option<u64>,
    pub fps: u32,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            status: None,
            total_objects: None,
            distribution: Vec::new(),
            recent: Vec::new(),
            log: Vec::new(),
            frames: 0,
            frame_number: None,
            fps: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn status_kind(&self) -> Option<StatusKind> {
        self.status.as_ref().map(|(_, kind)| *kind)
    }

    fn line(&mut self, text: &str) {
        // Console gone: nothing useful left to do with the error.
        let _ = writeln!(self.out, "{text}");
    }
}

/// Statistics block printed by `visiondeck stats`.
pub fn format_summary<W: Write>(view: &ConsoleView<W>) -> String {
    let mut s = String::new();
    s.push_str(&format!(
        "  Total objects:  {}\n",
        view.total_objects.as_deref().unwrap_or("0")
    ));

    let total: u64 = view.distribution.iter().map(|(_, n)| n).sum();
    if total > 0 {
        s.push_str("\n  Classes:\n");
        for (label, count) in &view.distribution {
            let pct = *count as f64 * 100.0 / total as f64;
            s.push_str(&format!("    {label:<16} {count:>6}  ({pct:.0}%)\n"));
        }
    }

    if !view.log.is_empty() {
        s.push_str("\n  Recent log:\n");
        for d in view.log.iter().rev() {
            s.push_str(&format!(
                "    {:<10} {:<16} {}\n",
                d.timestamp.as_deref().unwrap_or("--:--:--"),
                d.class,
                format_confidence(d.confidence)
            ));
        }
    }
    s
}

/// One line per streamed frame for `visiondeck watch`.
pub fn format_frame_line<W: Write>(view: &ConsoleView<W>) -> String {
    let number = view
        .frame_number
        .map(|n| format!("#{n}"))
        .unwrap_or_else(|| format!("({})", view.frames));
    let objects = if view.recent.is_empty() {
        "-".to_string()
    } else {
        view.recent
            .iter()
            .map(|r| format!("{} {}", r.class, r.confidence))
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "[frame {number}] fps={} total={} {objects}",
        view.fps,
        view.total_objects.as_deref().unwrap_or("0")
    )
}

impl<W: Write> ViewPort for ConsoleView<W> {
    fn show_placeholder(&mut self) {}

    fn show_live(&mut self) {}

    fn show_frame(&mut self, _frame: &EncodedFrame) {
        self.frames += 1;
    }

    fn set_status(&mut self, text: &str, kind: StatusKind) {
        self.line(&format!("[status] {text}"));
        self.status = Some((text.to_string(), kind));
    }

    fn notify(&mut self, message: &str, kind: StatusKind, _at: Instant) {
        self.line(&format!("[{}] {message}", kind.label()));
    }

    fn set_total_objects(&mut self, total: &str) {
        self.total_objects = Some(total.to_string());
    }

    fn set_fps(&mut self, fps: u32) {
        self.fps = fps;
    }

    fn set_session_time(&mut self, _text: &str) {}

    fn set_frame_number(&mut self, frame: u64) {
        self.frame_number = Some(frame);
    }

    fn set_recent(&mut self, items: &[RecentItem]) {
        self.recent = items.to_vec();
    }

    fn set_distribution(&mut self, labels: &[String], counts: &[u64]) {
        self.distribution = labels.iter().cloned().zip(counts.iter().copied()).collect();
    }

    fn set_log(&mut self, entries: &[Detection]) {
        self.log = entries.to_vec();
    }

    fn set_controls(&mut self, _controls: &ControlStates) {}

    fn set_upload_highlight(&mut self, _on: bool) {}

    fn set_confirmation(&mut self, _prompt: Option<&str>) {}
}
