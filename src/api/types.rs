// src/api/types.rs — Wire types for the detection server's HTTP and realtime payloads.

use std::fmt;

use base64::Engine;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::infra::errors::DeckError;

/// A single classified object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub class: String,
    pub confidence: f64,
    /// `[x1, y1, x2, y2]` in frame pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<f64>>,
    /// Server wall clock, `HH:MM:SS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Detection {
    pub fn new(class: impl Into<String>, confidence: f64) -> Self {
        Self {
            class: class.into(),
            confidence,
            bbox: None,
            timestamp: None,
        }
    }
}

/// Base64-encoded JPEG as sent by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedFrame(pub String);

impl EncodedFrame {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn decode(&self) -> Result<Vec<u8>, DeckError> {
        Ok(base64::engine::general_purpose::STANDARD.decode(self.0.trim())?)
    }

    pub fn encode(bytes: &[u8]) -> Self {
        EncodedFrame(base64::engine::general_purpose::STANDARD.encode(bytes))
    }
}

/// `{status: ...}` reply of the start/stop/clear endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusReply {
    #[serde(default)]
    pub status: String,
}

impl StatusReply {
    pub fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
        }
    }

    /// `started` and `already_running` both mean the capture loop is live.
    pub fn is_running(&self) -> bool {
        self.status == "started" || self.status == "already_running"
    }

    pub fn is_stopped(&self) -> bool {
        self.status == "stopped"
    }

    pub fn is_cleared(&self) -> bool {
        self.status == "cleared"
    }
}

/// Reply of `POST /upload_file`: either a processed frame or an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadReply {
    #[serde(default)]
    pub frame: Option<EncodedFrame>,
    #[serde(default)]
    pub detections: Option<Vec<Detection>>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Per-class aggregate as reported by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassStat {
    #[serde(default)]
    pub count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_confidence: Option<f64>,
}

/// Class name → stats, in the order the server sent them (most frequent first).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassDistribution(pub Vec<(String, ClassStat)>);

impl ClassDistribution {
    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn counts(&self) -> Vec<u64> {
        self.0.iter().map(|(_, stat)| stat.count).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for ClassDistribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DistributionVisitor;

        impl<'de> Visitor<'de> for DistributionVisitor {
            type Value = ClassDistribution;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of class name to {count}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, stat)) = map.next_entry::<String, ClassStat>()? {
                    entries.push((name, stat));
                }
                Ok(ClassDistribution(entries))
            }
        }

        deserializer.deserialize_map(DistributionVisitor)
    }
}

/// Aggregate statistics attached to frames and returned by `GET /statistics`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total_detections: Option<u64>,
    #[serde(default)]
    pub class_statistics: Option<ClassDistribution>,
    #[serde(default)]
    pub session_duration: Option<String>,
}

/// Payload of the `video_frame` realtime event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FrameEvent {
    pub frame: EncodedFrame,
    #[serde(default)]
    pub detections: Option<Vec<Detection>>,
    #[serde(default)]
    pub stats: Option<Stats>,
    #[serde(default)]
    pub frame_count: Option<u64>,
}

/// Statistics plus recent log, fetched together on refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub stats: Stats,
    pub logs: Vec<Detection>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_reply_running_variants() {
        assert!(StatusReply::new("started").is_running());
        assert!(StatusReply::new("already_running").is_running());
        assert!(!StatusReply::new("error").is_running());
        assert!(StatusReply::new("stopped").is_stopped());
        assert!(StatusReply::new("cleared").is_cleared());
    }

    #[test]
    fn test_status_reply_missing_field_defaults_empty() {
        let r: StatusReply = serde_json::from_str("{}").unwrap();
        assert_eq!(r.status, "");
        assert!(!r.is_running());
    }

    #[test]
    fn test_class_distribution_keeps_server_order() {
        let stats: Stats = serde_json::from_str(
            r#"{
                "class_statistics": {
                    "person": {"count": 12, "avg_confidence": 0.81},
                    "car": {"count": 7, "avg_confidence": 0.9},
                    "bicycle": {"count": 1}
                },
                "total_detections": 20,
                "session_duration": "0:05:12"
            }"#,
        )
        .unwrap();
        let dist = stats.class_statistics.unwrap();
        assert_eq!(dist.labels(), vec!["person", "car", "bicycle"]);
        assert_eq!(dist.counts(), vec![12, 7, 1]);
        assert_eq!(stats.total_detections, Some(20));
    }

    #[test]
    fn test_frame_event_optional_fields_absent() {
        let ev: FrameEvent = serde_json::from_str(r#"{"frame": "AAAA"}"#).unwrap();
        assert_eq!(ev.frame.as_str(), "AAAA");
        assert!(ev.detections.is_none());
        assert!(ev.stats.is_none());
        assert!(ev.frame_count.is_none());
    }

    #[test]
    fn test_frame_event_full_payload() {
        let ev: FrameEvent = serde_json::from_str(
            r#"{
                "frame": "AAAA",
                "detections": [
                    {"class": "person", "confidence": 0.912, "bbox": [1.0, 2.0, 30.0, 40.0], "timestamp": "12:00:01"}
                ],
                "stats": {"total_detections": 3},
                "frame_count": 48
            }"#,
        )
        .unwrap();
        let dets = ev.detections.unwrap();
        assert_eq!(dets[0].class, "person");
        assert_eq!(dets[0].bbox.as_deref(), Some(&[1.0, 2.0, 30.0, 40.0][..]));
        assert_eq!(ev.stats.unwrap().total_detections, Some(3));
        assert_eq!(ev.frame_count, Some(48));
    }

    #[test]
    fn test_upload_reply_error_shape() {
        let r: UploadReply = serde_json::from_str(r#"{"error": "No file selected"}"#).unwrap();
        assert!(r.frame.is_none());
        assert_eq!(r.error.as_deref(), Some("No file selected"));
    }

    #[test]
    fn test_encoded_frame_decode() {
        let f = EncodedFrame::encode(b"\xff\xd8jpeg");
        assert_eq!(f.decode().unwrap(), b"\xff\xd8jpeg".to_vec());
        assert!(EncodedFrame("%%%".into()).decode().is_err());
    }
}
