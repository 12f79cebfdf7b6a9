// src/tui/widgets/distribution.rs — Class distribution as horizontal bars.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::theme::Theme;
use crate::tui::view::ViewState;

const LABEL_WIDTH: usize = 12;

pub fn render(f: &mut Frame, area: Rect, view: &ViewState) {
    let block = Block::default()
        .title(" Class Distribution ")
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let total: u64 = view.counts.iter().sum();
    if total == 0 {
        let p = Paragraph::new(Line::from(Span::styled(
            "  No detections yet",
            Theme::text_dim(),
        )))
        .block(block);
        f.render_widget(p, area);
        return;
    }

    // label, space, bar, space, "count (pct%)"
    let bar_room = (area.width as usize).saturating_sub(LABEL_WIDTH + 2 + 16 + 2);
    let lines: Vec<Line> = view
        .distribution()
        .enumerate()
        .map(|(i, (label, count))| {
            let share = count as f64 / total as f64;
            let bar_len = bar_len(share, bar_room);
            Line::from(vec![
                Span::styled(format!(" {}", fit_label(label)), Theme::text()),
                Span::raw(" "),
                Span::styled(
                    "\u{2588}".repeat(bar_len),
                    Style::default().fg(Theme::chart_color(i)),
                ),
                Span::styled(
                    format!(" {count} ({:.0}%)", share * 100.0),
                    Theme::text_dim(),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn bar_len(share: f64, room: usize) -> usize {
    if share <= 0.0 || room == 0 {
        return 0;
    }
    ((share * room as f64).round() as usize).clamp(1, room)
}

fn fit_label(label: &str) -> String {
    let truncated: String = label.chars().take(LABEL_WIDTH).collect();
    format!("{:<width$}", truncated, width = LABEL_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_len_never_hides_nonzero_share() {
        assert_eq!(bar_len(0.001, 40), 1);
        assert_eq!(bar_len(0.5, 40), 20);
        assert_eq!(bar_len(1.0, 40), 40);
        assert_eq!(bar_len(0.0, 40), 0);
        assert_eq!(bar_len(0.5, 0), 0);
    }

    #[test]
    fn test_fit_label_pads_and_truncates() {
        assert_eq!(fit_label("car"), "car         ");
        assert_eq!(fit_label("traffic light post"), "traffic ligh");
    }
}
