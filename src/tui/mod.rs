// src/tui/mod.rs — Terminal dashboard.
//
// Live feed, status, counters, recent detections and class distribution,
// built with ratatui. Launch via `visiondeck` or `visiondeck dash`.

pub mod app;
pub mod frame_render;
pub mod theme;
pub mod view;
pub mod widgets;

pub use app::run_dashboard;
