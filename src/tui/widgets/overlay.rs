// src/tui/widgets/overlay.rs — Toasts, the confirmation dialog, and the upload zone.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::theme::Theme;
use crate::tui::view::ViewState;
use crate::tui::widgets::centered;

const TOAST_WIDTH: u16 = 44;

/// Stack live toasts in the top-right corner, newest at the top.
pub fn render_notifications(f: &mut Frame, area: Rect, view: &ViewState) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width.saturating_sub(width + 1);
    let mut y = area.y + 1;

    for n in view.notifications.iter().collect::<Vec<_>>().into_iter().rev() {
        if y + 3 > area.y + area.height {
            break;
        }
        let rect = Rect::new(x, y, width, 3);
        let p = Paragraph::new(Line::from(Span::raw(n.message.clone())))
            .style(Theme::notice(n.kind))
            .block(Block::default().borders(Borders::ALL).style(Theme::notice(n.kind)))
            .wrap(Wrap { trim: true });
        f.render_widget(Clear, rect);
        f.render_widget(p, rect);
        y += 3;
    }
}

pub fn render_confirmation(f: &mut Frame, area: Rect, prompt: &str) {
    let rect = centered(area, 60, 7);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(prompt.to_string(), Theme::text())),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Theme::control(true)),
            Span::styled(" confirm   ", Theme::key_desc()),
            Span::styled("n", Theme::control(true)),
            Span::styled(" cancel", Theme::key_desc()),
        ]),
    ];
    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Confirm ")
                .borders(Borders::ALL)
                .border_style(Theme::header())
                .style(Theme::modal()),
        );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}

/// Upload drop target. While highlighted it shows the path being entered.
pub fn render_upload_zone(f: &mut Frame, area: Rect, view: &ViewState, input: &str) {
    let block = Block::default()
        .title(" Upload Image ")
        .borders(Borders::ALL)
        .border_style(Theme::upload_border(view.upload_highlight));

    let line = if view.controls.upload.busy {
        Line::from(Span::styled(" Processing image...", Theme::text_dim()))
    } else if view.upload_highlight {
        Line::from(vec![
            Span::styled(" path: ", Theme::key_desc()),
            Span::styled(input.to_string(), Theme::text()),
            Span::styled("\u{258f}", Theme::header()),
        ])
    } else {
        Line::from(Span::styled(
            " Press u and type a path, or drop an image file onto the terminal (jpg, png, bmp)",
            Theme::text_dim(),
        ))
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}
