// src/lib.rs — Library root for VisionDeck

pub mod api;
pub mod capture;
pub mod channel;
pub mod cli;
pub mod core;
pub mod infra;
pub mod tui;
