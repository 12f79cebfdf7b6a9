// src/main.rs — VisionDeck entry point

use std::io;
use std::sync::Arc;

use clap::Parser;

use visiondeck::api::{DetectionApi, HttpDetectionApi};
use visiondeck::cli::{commands, Cli, Commands};
use visiondeck::infra::config::Config;
use visiondeck::infra::{logger, paths};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Commands::Dash);

    // The dashboard owns the terminal; everything else logs to stderr.
    if command == Commands::Dash {
        let level = if cli.verbose == 0 { "info" } else { cli.log_level() };
        let log_path = paths::log_file_path();
        if let Err(e) = logger::init_file_logging(level, &log_path) {
            eprintln!("warning: file logging disabled ({}): {e}", log_path.display());
        }
    } else {
        logger::init_logging(cli.log_level());
    }

    // Load config (falls back to defaults if no config.toml)
    let mut config = match &cli.config {
        Some(path) => {
            let mut c = Config::load_from(path)?;
            c.apply_env();
            c
        }
        None => Config::load()?,
    };
    if let Some(server) = &cli.server {
        config.server.base_url = server.clone();
    }
    config.validate()?;
    tracing::debug!("Server: {}", config.server.base_url);

    let api = HttpDetectionApi::new(&config.server)?;
    let out = io::stderr();

    match command {
        Commands::Dash => {
            let api: Arc<dyn DetectionApi> = Arc::new(api);
            visiondeck::tui::run_dashboard(&config, api).await
        }
        Commands::Start => commands::run_start(&api, &config, out).await,
        Commands::Stop => commands::run_stop(&api, &config, out).await,
        Commands::Clear { yes } => commands::run_clear(&api, &config, yes, out).await,
        Commands::Upload { file, save } => {
            commands::run_upload(&api, &config, &file, save, out).await
        }
        Commands::Stats => commands::run_stats(&api, &config, out).await,
        Commands::Watch { frames } => commands::run_watch(&config, frames, out).await,
    }
}
