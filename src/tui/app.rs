// src/tui/app.rs — TUI event loop, key handling, and screen layout.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use crossterm::{
    event::{
        DisableBracketedPaste, EnableBracketedPaste, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::api::{self, ApiCall, ApiReply, DetectionApi};
use crate::capture::DirectorySink;
use crate::channel;
use crate::core::clock::{Clock, SystemClock};
use crate::core::upload::parse_dropped_path;
use crate::core::DashboardController;
use crate::infra::config::Config;

use super::theme::Theme;
use super::view::ViewState;
use super::widgets;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Normal,
    /// Typing a path into the upload zone.
    Upload,
}

#[derive(Debug, PartialEq)]
enum Action {
    None,
    Quit,
    Send(ApiCall),
}

impl From<Option<ApiCall>> for Action {
    fn from(call: Option<ApiCall>) -> Self {
        call.map_or(Action::None, Action::Send)
    }
}

struct App<C: Clock = SystemClock> {
    controller: DashboardController<ViewState, C>,
    mode: InputMode,
    input: String,
    server: String,
}

impl<C: Clock> App<C> {
    fn new(controller: DashboardController<ViewState, C>, server: String) -> Self {
        Self {
            controller,
            mode: InputMode::Normal,
            input: String::new(),
            server,
        }
    }

    fn view(&self) -> &ViewState {
        self.controller.view()
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if self.controller.is_awaiting_confirmation() {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    self.controller.confirm_clear(true).into()
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.controller.confirm_clear(false).into()
                }
                _ => Action::None,
            };
        }

        match self.mode {
            InputMode::Upload => self.handle_upload_key(key),
            InputMode::Normal => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
                KeyCode::Char('s') => self.controller.request_start().into(),
                KeyCode::Char('x') => self.controller.request_stop().into(),
                KeyCode::Char('c') => {
                    self.controller.capture_frame();
                    Action::None
                }
                KeyCode::Char('d') => {
                    self.controller.request_clear();
                    Action::None
                }
                KeyCode::Char('u') => {
                    self.mode = InputMode::Upload;
                    self.input.clear();
                    self.controller.drag_over();
                    Action::None
                }
                KeyCode::Char('r') => self.controller.request_refresh().into(),
                _ => Action::None,
            },
        }
    }

    fn handle_upload_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => {
                self.leave_upload();
                self.controller.drag_leave();
                Action::None
            }
            KeyCode::Enter => {
                let text = std::mem::take(&mut self.input);
                self.leave_upload();
                self.drop_text(&text)
            }
            KeyCode::Backspace => {
                self.input.pop();
                Action::None
            }
            KeyCode::Char(ch) => {
                self.input.push(ch);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Bracketed paste: a file dragged onto the terminal arrives as its path.
    fn handle_paste(&mut self, text: &str) -> Action {
        if self.mode == InputMode::Upload {
            self.input.push_str(text.trim_end_matches(['\r', '\n']));
            return Action::None;
        }
        self.controller.drag_over();
        self.drop_text(text)
    }

    fn drop_text(&mut self, text: &str) -> Action {
        let paths: Vec<PathBuf> = parse_dropped_path(text).into_iter().collect();
        self.controller.drop_files(&paths).into()
    }

    fn leave_upload(&mut self) {
        self.mode = InputMode::Normal;
        self.input.clear();
    }
}

// ── Public entry point ───────────────────────────────────────────

/// Launch the TUI dashboard. Blocks until the user quits (q / Esc / Ctrl-C).
pub async fn run_dashboard(config: &Config, api: Arc<dyn DetectionApi>) -> anyhow::Result<()> {
    let view = ViewState::new(config.ui.notification_ttl(), config.ui.render_frames);
    let sink = DirectorySink::new(config.capture.resolved_dir());
    let controller =
        DashboardController::new(view, SystemClock, Box::new(sink), config.upload.clone());
    let mut app = App::new(controller, config.server.base_url.clone());

    let (channel_rx, channel_task) = channel::spawn(&config.server.base_url, &config.channel)?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app, api, channel_rx, config).await;

    channel_task.abort();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    api: Arc<dyn DetectionApi>,
    mut channel_rx: mpsc::Receiver<channel::ChannelEvent>,
    config: &Config,
) -> anyhow::Result<()> {
    let (reply_tx, mut reply_rx) = mpsc::unbounded_channel::<ApiReply>();
    let dispatch = |call: ApiCall| {
        let api = Arc::clone(&api);
        let tx = reply_tx.clone();
        tokio::spawn(async move {
            let reply = api::execute(api.as_ref(), call).await;
            // Receiver gone means the dashboard is closing.
            let _ = tx.send(reply);
        });
    };

    if let Some(call) = app.controller.request_refresh() {
        dispatch(call);
    }

    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(std::time::Duration::from_millis(config.ui.tick_ms));

    loop {
        terminal.draw(|f| render(f, app))?;

        let action = tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                Some(Ok(_)) => Action::None,
                Some(Err(e)) => return Err(e.into()),
                None => Action::Quit,
            },
            Some(event) = channel_rx.recv() => {
                app.controller.handle_channel_event(event);
                Action::None
            }
            Some(reply) = reply_rx.recv() => {
                app.controller.finish(reply);
                Action::None
            }
            _ = ticker.tick() => {
                app.controller.tick();
                Action::None
            }
        };

        match action {
            Action::Quit => return Ok(()),
            Action::Send(call) => {
                tracing::debug!("dispatching {call:?}");
                dispatch(call);
            }
            Action::None => {}
        }
    }
}

// ── Rendering ────────────────────────────────────────────────────

fn render<C: Clock>(f: &mut Frame, app: &App<C>) {
    let size = f.area();
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header + status
            Constraint::Min(10),   // Feed + panels
            Constraint::Length(3), // Upload zone
            Constraint::Length(1), // Footer / key hints
        ])
        .split(size);

    render_header(f, chunks[0], view, &app.server);
    render_main(f, chunks[1], view);
    widgets::overlay::render_upload_zone(f, chunks[2], view, &app.input);
    render_footer(f, chunks[3], app);

    widgets::overlay::render_notifications(f, size, view);
    if let Some(prompt) = &view.confirmation {
        widgets::overlay::render_confirmation(f, size, prompt);
    }
}

fn render_header(f: &mut Frame, area: Rect, view: &ViewState, server: &str) {
    let line = Line::from(vec![
        Span::styled(" VisionDeck ", Theme::header()),
        Span::styled(format!(" {server}   "), Theme::text_dim()),
        Span::styled("\u{25cf} ", Theme::status_dot(view.status_kind)),
        Span::styled(view.status_text.clone(), Theme::text()),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border());
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_main(f: &mut Frame, area: Rect, view: &ViewState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(8)])
        .split(columns[0]);
    widgets::feed::render(f, left[0], view);
    widgets::detections::render_log(f, left[1], view);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Min(4),
        ])
        .split(columns[1]);
    widgets::stats::render(f, right[0], view);
    widgets::detections::render_recent(f, right[1], view);
    widgets::distribution::render(f, right[2], view);
}

fn render_footer<C: Clock>(f: &mut Frame, area: Rect, app: &App<C>) {
    let c = &app.view().controls;
    let hints: Vec<(&str, &str, bool)> = match app.mode {
        InputMode::Upload => vec![("Enter", "upload", true), ("Esc", "cancel", true)],
        InputMode::Normal => vec![
            ("s", c.start_label, c.start.enabled),
            ("x", "stop", c.stop.enabled),
            ("c", "capture", c.capture.enabled),
            ("d", "clear", c.clear.enabled),
            ("u", "upload", c.upload.enabled),
            ("r", "refresh", true),
            ("q", "quit", true),
        ],
    };

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, desc, enabled) in hints {
        spans.push(Span::styled(format!(" {key}"), Theme::control(enabled)));
        spans.push(Span::styled(format!(" {desc} "), Theme::key_desc()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
