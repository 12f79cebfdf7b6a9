// src/cli/commands.rs — Headless subcommands: one request, printed outcome.

use std::io::Write;
use std::path::Path;

use anyhow::bail;

use crate::api::{self, ApiCall, DetectionApi};
use crate::capture::{capture_file_name, DirectorySink, FrameSink};
use crate::channel::{self, ChannelEvent};
use crate::core::clock::SystemClock;
use crate::core::controller::CLEAR_PROMPT;
use crate::core::{DashboardController, StatusKind};
use crate::infra::config::Config;

use super::console::{format_frame_line, format_summary, ConsoleView};

type Console<W> = DashboardController<ConsoleView<W>, SystemClock>;

fn controller<W: Write>(view: ConsoleView<W>, config: &Config) -> Console<W> {
    let sink = DirectorySink::new(config.capture.resolved_dir());
    DashboardController::new(view, SystemClock, Box::new(sink), config.upload.clone())
}

/// Execute `call`, hand the reply to the controller, and fail if the call did.
async fn send<W: Write>(
    c: &mut Console<W>,
    api: &dyn DetectionApi,
    call: ApiCall,
) -> anyhow::Result<()> {
    let reply = api::execute(api, call).await;
    let failure = reply.error().map(|e| e.to_string());
    c.finish(reply);
    match failure {
        Some(msg) => bail!(msg),
        None => Ok(()),
    }
}

pub async fn run_start<W: Write>(
    api: &dyn DetectionApi,
    config: &Config,
    out: W,
) -> anyhow::Result<()> {
    let mut c = controller(ConsoleView::new(out), config);
    match c.request_start() {
        Some(call) => send(&mut c, api, call).await,
        None => Ok(()),
    }
}

/// The server alone knows whether it is running, so stop is always sent.
pub async fn run_stop<W: Write>(
    api: &dyn DetectionApi,
    config: &Config,
    out: W,
) -> anyhow::Result<()> {
    let mut c = controller(ConsoleView::new(out), config);
    send(&mut c, api, ApiCall::Stop).await
}

pub async fn run_clear<W: Write>(
    api: &dyn DetectionApi,
    config: &Config,
    yes: bool,
    out: W,
) -> anyhow::Result<()> {
    let mut c = controller(ConsoleView::new(out), config);
    c.request_clear();

    let confirmed = yes
        || inquire::Confirm::new(CLEAR_PROMPT)
            .with_default(false)
            .prompt()
            .unwrap_or(false);

    match c.confirm_clear(confirmed) {
        Some(call) => send(&mut c, api, call).await,
        None => {
            eprintln!("Cancelled.");
            Ok(())
        }
    }
}

pub async fn run_upload<W: Write>(
    api: &dyn DetectionApi,
    config: &Config,
    file: &Path,
    save: bool,
    out: W,
) -> anyhow::Result<()> {
    let mut c = controller(ConsoleView::new(out), config);
    let Some(call) = c.request_upload(file) else {
        bail!("{} was not uploaded", file.display());
    };
    send(&mut c, api, call).await?;

    if c.view().status_kind() == Some(StatusKind::Error) {
        bail!("server could not process {}", file.display());
    }

    for item in &c.view().recent {
        println!("  {:<16} {}", item.class, item.confidence);
    }

    if save {
        if let Some(frame) = c.current_frame() {
            let mut sink = DirectorySink::new(config.capture.resolved_dir());
            let name = capture_file_name(chrono::Utc::now());
            let path = sink.save(&name, &frame.decode()?)?;
            println!("Saved annotated image to {}", path.display());
        }
    }
    Ok(())
}

pub async fn run_stats<W: Write>(
    api: &dyn DetectionApi,
    config: &Config,
    out: W,
) -> anyhow::Result<()> {
    let mut c = controller(ConsoleView::new(out), config);
    if let Some(call) = c.request_refresh() {
        send(&mut c, api, call).await?;
    }
    println!("visiondeck v{} · {}", env!("CARGO_PKG_VERSION"), config.server.base_url);
    println!();
    print!("{}", format_summary(c.view()));
    Ok(())
}

/// Follow the realtime channel until `frames` frames arrived or Ctrl-C.
pub async fn run_watch<W: Write>(
    config: &Config,
    frames: Option<u64>,
    out: W,
) -> anyhow::Result<()> {
    let mut c = controller(ConsoleView::new(out), config);
    let (mut rx, task) = channel::spawn(&config.server.base_url, &config.channel)?;

    let result = loop {
        let event = tokio::select! {
            event = rx.recv() => event,
            _ = tokio::signal::ctrl_c() => break Ok(()),
        };
        let Some(event) = event else {
            break Err(anyhow::anyhow!("realtime channel closed"));
        };

        let is_frame = matches!(event, ChannelEvent::Frame(_));
        c.handle_channel_event(event);
        if is_frame {
            println!("{}", format_frame_line(c.view()));
            if frames.is_some_and(|limit| c.view().frames >= limit) {
                break Ok(());
            }
        }
    };

    task.abort();
    result
}
