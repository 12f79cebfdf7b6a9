// src/cli/mod.rs — CLI definition (clap derive)

pub mod commands;
pub mod console;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "visiondeck",
    about = "Terminal dashboard for an object-detection server",
    version
)]
pub struct Cli {
    /// Server base URL (overrides config and VISIONDECK_SERVER)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum Commands {
    /// Launch the TUI dashboard (default)
    Dash,
    /// Start webcam detection on the server
    Start,
    /// Stop webcam detection
    Stop,
    /// Clear all detection data on the server
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Run detection on an image file
    Upload {
        /// Image to upload (jpg, jpeg, png, bmp)
        file: PathBuf,
        /// Save the annotated image to the captures directory
        #[arg(long)]
        save: bool,
    },
    /// Print server statistics and the recent detection log
    Stats,
    /// Follow the realtime feed and print per-frame summaries
    Watch {
        /// Exit after this many frames
        #[arg(long)]
        frames: Option<u64>,
    },
}
