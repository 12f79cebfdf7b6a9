// src/tui/theme.rs — Color scheme and style definitions for the TUI dashboard.

use ratatui::style::{Color, Modifier, Style};

use crate::core::status::{Rgb, StatusKind};

/// Indigo-on-slate palette of the detection dashboard.
pub struct Theme;

impl Theme {
    // ── Brand colors ─────────────────────────────────────────────
    pub const INDIGO: Color = Color::Rgb(0x4f, 0x46, 0xe5);
    pub const WHITE: Color = Color::Rgb(240, 240, 240);
    pub const SLATE: Color = Color::Rgb(0x1f, 0x29, 0x37);
    pub const GRAY: Color = Color::Rgb(0x6b, 0x72, 0x80);
    pub const DIM: Color = Color::Rgb(80, 80, 100);
    /// Resting border of the upload zone.
    pub const ZONE_IDLE: Color = Color::Rgb(0xd1, 0xd5, 0xdb);

    /// Chart slice colors, cycled by class index.
    pub const CHART: [Color; 10] = [
        Color::Rgb(0x4f, 0x46, 0xe5),
        Color::Rgb(0x10, 0xb9, 0x81),
        Color::Rgb(0xf5, 0x9e, 0x0b),
        Color::Rgb(0xef, 0x44, 0x44),
        Color::Rgb(0x8b, 0x5c, 0xf6),
        Color::Rgb(0x06, 0xb6, 0xd4),
        Color::Rgb(0x84, 0xcc, 0x16),
        Color::Rgb(0xf9, 0x73, 0x16),
        Color::Rgb(0xec, 0x48, 0x99),
        Color::Rgb(0x6b, 0x72, 0x80),
    ];

    pub fn rgb(c: Rgb) -> Color {
        Color::Rgb(c.0, c.1, c.2)
    }

    pub fn chart_color(index: usize) -> Color {
        Theme::CHART[index % Theme::CHART.len()]
    }

    // ── Semantic styles ──────────────────────────────────────────

    /// Main title / header bar.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::INDIGO)
            .add_modifier(Modifier::BOLD)
    }

    /// Block border (normal).
    pub fn border() -> Style {
        Style::default().fg(Theme::DIM)
    }

    /// Upload zone border, highlighted while something is dragged over it.
    pub fn upload_border(highlighted: bool) -> Style {
        if highlighted {
            Style::default().fg(Theme::INDIGO)
        } else {
            Style::default().fg(Theme::ZONE_IDLE)
        }
    }

    /// Normal body text.
    pub fn text() -> Style {
        Style::default().fg(Theme::WHITE)
    }

    /// Dimmed / secondary text.
    pub fn text_dim() -> Style {
        Style::default().fg(Theme::GRAY)
    }

    /// Large counter value.
    pub fn counter() -> Style {
        Style::default()
            .fg(Theme::WHITE)
            .add_modifier(Modifier::BOLD)
    }

    /// The status indicator dot.
    pub fn status_dot(kind: StatusKind) -> Style {
        Style::default().fg(Theme::rgb(kind.indicator_color()))
    }

    /// A toast: white text on the kind's color.
    pub fn notice(kind: StatusKind) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Theme::rgb(kind.notice_color()))
            .add_modifier(Modifier::BOLD)
    }

    /// Control hint, dimmed when the control is disabled.
    pub fn control(enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(Theme::INDIGO)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::DIM)
        }
    }

    /// Description next to key hint.
    pub fn key_desc() -> Style {
        Style::default().fg(Theme::GRAY)
    }

    /// Table header row.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::INDIGO)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for a confidence value (color-coded).
    pub fn confidence(value: f64) -> Style {
        if value >= 0.8 {
            Style::default().fg(Theme::rgb(Rgb::GREEN))
        } else if value >= 0.5 {
            Style::default().fg(Theme::rgb(Rgb::AMBER))
        } else {
            Style::default().fg(Theme::rgb(Rgb::RED))
        }
    }

    /// Modal dialog frame.
    pub fn modal() -> Style {
        Style::default().fg(Theme::WHITE).bg(Theme::SLATE)
    }
}
