// src/tui/widgets/detections.rs — Recent detections and the server detection log.

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::core::recent::format_confidence;
use crate::tui::theme::Theme;
use crate::tui::view::ViewState;

pub fn render_recent(f: &mut Frame, area: Rect, view: &ViewState) {
    let block = Block::default()
        .title(" Recent Detections ")
        .borders(Borders::ALL)
        .border_style(Theme::border());

    if view.recent.is_empty() {
        let p = Paragraph::new(Line::from(Span::styled(
            "  No recent detections",
            Theme::text_dim(),
        )))
        .block(block);
        f.render_widget(p, area);
        return;
    }

    let rows: Vec<Row> = view
        .recent
        .iter()
        .map(|item| {
            Row::new(vec![
                Cell::from(item.class.clone()).style(Theme::text()),
                Cell::from(item.confidence.clone()).style(Theme::text_dim()),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Min(12), Constraint::Length(8)]).block(block);
    f.render_widget(table, area);
}

pub fn render_log(f: &mut Frame, area: Rect, view: &ViewState) {
    let block = Block::default()
        .title(format!(" Detection Log ({}) ", view.log.len()))
        .borders(Borders::ALL)
        .border_style(Theme::border());

    if view.log.is_empty() {
        let p = Paragraph::new(Line::from(Span::styled(
            "  Press r to load the server log.",
            Theme::text_dim(),
        )))
        .block(block);
        f.render_widget(p, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Time").style(Theme::table_header()),
        Cell::from("Class").style(Theme::table_header()),
        Cell::from("Confidence").style(Theme::table_header()),
    ]);

    // newest first
    let rows: Vec<Row> = view
        .log
        .iter()
        .rev()
        .map(|d| {
            Row::new(vec![
                Cell::from(d.timestamp.clone().unwrap_or_else(|| "--:--:--".into()))
                    .style(Theme::text_dim()),
                Cell::from(d.class.clone()).style(Theme::text()),
                Cell::from(format_confidence(d.confidence)).style(Theme::confidence(d.confidence)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Min(12),
        Constraint::Length(11),
    ];
    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}
