// src/tui/widgets/stats.rs — Counters: total objects, session time, FPS.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::theme::Theme;
use crate::tui::view::ViewState;

pub fn render(f: &mut Frame, area: Rect, view: &ViewState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    render_counter(f, chunks[0], "Total Objects", &view.total_objects);
    render_counter(f, chunks[1], "Session", &view.session_time);
    render_counter(f, chunks[2], "FPS", &view.fps.to_string());
}

fn render_counter(f: &mut Frame, area: Rect, title: &str, value: &str) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let p = Paragraph::new(Line::from(Span::styled(
        format!(" {value}"),
        Theme::counter(),
    )))
    .block(block);
    f.render_widget(p, area);
}
