// src/core/recent.rs — Recent-detections projection.

use crate::api::types::Detection;

/// The recent list never shows more than this many entries.
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentItem {
    pub class: String,
    /// Already formatted, e.g. `91.2%`.
    pub confidence: String,
}

/// Last [`RECENT_LIMIT`] detections, most recent first.
pub fn recent_items(detections: &[Detection]) -> Vec<RecentItem> {
    detections
        .iter()
        .rev()
        .take(RECENT_LIMIT)
        .map(|d| RecentItem {
            class: d.class.clone(),
            confidence: format_confidence(d.confidence),
        })
        .collect()
}

/// Confidence in [0,1] as a percentage with one decimal.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dets(n: usize) -> Vec<Detection> {
        (0..n)
            .map(|i| Detection::new(format!("c{i}"), 0.5))
            .collect()
    }

    #[test]
    fn test_fewer_than_limit_all_shown_reversed() {
        let items = recent_items(&dets(3));
        let classes: Vec<_> = items.iter().map(|i| i.class.as_str()).collect();
        assert_eq!(classes, vec!["c2", "c1", "c0"]);
    }

    #[test]
    fn test_more_than_limit_keeps_latest_five() {
        let items = recent_items(&dets(8));
        let classes: Vec<_> = items.iter().map(|i| i.class.as_str()).collect();
        assert_eq!(classes, vec!["c7", "c6", "c5", "c4", "c3"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(recent_items(&[]).is_empty());
    }

    #[test]
    fn test_confidence_one_decimal() {
        assert_eq!(format_confidence(0.912), "91.2%");
        assert_eq!(format_confidence(1.0), "100.0%");
        assert_eq!(format_confidence(0.0), "0.0%");
        assert_eq!(format_confidence(0.5), "50.0%");
    }
}
