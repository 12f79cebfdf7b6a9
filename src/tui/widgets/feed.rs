// src/tui/widgets/feed.rs — Live feed panel: the frame, or the idle placeholder.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::frame_render;
use crate::tui::theme::Theme;
use crate::tui::view::ViewState;

pub fn render(f: &mut Frame, area: Rect, view: &ViewState) {
    let title = match view.frame_number {
        Some(n) if view.feed_visible => format!(" Live Feed · frame {n} "),
        _ => " Live Feed ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    if !view.feed_visible {
        render_placeholder(f, inner);
        return;
    }

    match &view.frame {
        Some(img) => {
            let lines = frame_render::half_block_lines(img, inner.width, inner.height);
            f.render_widget(Paragraph::new(lines), inner);
        }
        None => {
            let text = match &view.frame_error {
                Some(e) => format!("Frame could not be drawn: {e}"),
                None if view.frames_received > 0 => {
                    format!("{} frames received", view.frames_received)
                }
                None => "Waiting for frames...".to_string(),
            };
            let p = Paragraph::new(Line::from(Span::styled(text, Theme::text_dim())))
                .alignment(Alignment::Center);
            f.render_widget(p, vertical_middle(inner));
        }
    }
}

fn render_placeholder(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("No active feed", Theme::header())),
        Line::from(""),
        Line::from(vec![
            Span::styled("s", Theme::control(true)),
            Span::styled(" start detection   ", Theme::key_desc()),
            Span::styled("u", Theme::control(true)),
            Span::styled(" upload an image", Theme::key_desc()),
        ]),
    ];
    let p = Paragraph::new(lines).alignment(Alignment::Center);
    let mid = vertical_middle(area);
    let shifted = Rect {
        y: mid.y.saturating_sub(1),
        height: 3.min(area.height),
        ..mid
    };
    f.render_widget(p, shifted);
}

fn vertical_middle(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: 1.min(area.height),
        ..area
    }
}
