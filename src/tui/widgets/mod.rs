// src/tui/widgets/mod.rs — Panels of the dashboard screen.

pub mod detections;
pub mod distribution;
pub mod feed;
pub mod overlay;
pub mod stats;

use ratatui::layout::Rect;

/// A `width × height` rect centered in `area`, clamped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
