mod args;
mod charts;
mod db;
mod export;
mod ledger;
mod models;
mod run;
mod seed;
mod tips;
mod tracker;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::args::Args;
use crate::db::Store;
use crate::tracker::Tracker;

const DB_FILE: &str = "lekhajokha.db";
const LOG_FILE: &str = "lekhajokha.log";

fn main() -> Result<()> {
    let args = Args::parse();
    let data_dir = get_data_dir(args.common().home())?;
    let log_level = args.common().log_level();

    match args.command() {
        None => {
            // The TUI owns the terminal, so logs go to a file.
            init_file_logger(log_level, &data_dir.join(LOG_FILE))?;
            let tracker = open_tracker(&data_dir)?;
            run::as_tui(tracker, &data_dir)
        }
        Some(command) => {
            init_logger(log_level);
            let mut tracker = open_tracker(&data_dir)?;
            run::as_cli(command, &mut tracker, &data_dir)
        }
    }
}

fn open_tracker(data_dir: &Path) -> Result<Tracker> {
    let store = Store::open(&data_dir.join(DB_FILE))?;
    Tracker::load(store, &chrono::Local::now())
}

fn env_filter(level: LevelFilter) -> EnvFilter {
    match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    }
}

/// Initializes the tracing subscriber on stderr.
fn init_logger(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .init();
}

/// Initializes the tracing subscriber, appending to `path`.
fn init_file_logger(level: LevelFilter, path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn get_data_dir(home: Option<&Path>) -> Result<PathBuf> {
    let data_dir = match home {
        Some(home) => home.to_path_buf(),
        None => directories::ProjectDirs::from("com", "lekhajokha", "LekhaJokha")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?
            .data_dir()
            .to_path_buf(),
    };
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir)
}
