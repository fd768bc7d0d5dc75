//! dayspan CLI - binary entry point.
//!
//! # Architecture
//!
//! The CLI wires [`dayspan_config`] (the board) into [`dayspan_driver`] (clock,
//! slots, refresh task) and prints every slot change to stdout:
//!
//! ```text
//! main() -> Board::load() -> Driver::new(board, clock, LineSink)
//!                                   |
//!                     --once: tick once and exit
//!                     else:   RefreshHandle::spawn() until Ctrl-C
//! ```
//!
//! Logs go to a file so they never interleave with slot output.

mod sink;

use std::{
    fs::{self, File, OpenOptions},
    io, iter,
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use dayspan_config::{Board, config_path, parse_target_datetime};
use dayspan_driver::{Clock, Driver, ManualClock, RefreshHandle, SystemClock};

use crate::sink::LineSink;

#[derive(Parser)]
#[command(name = "dayspan")]
#[command(about = "Live countdowns and count-ups for a board of dates")]
struct Cli {
    /// Board file (default: ~/.dayspan/config.toml, else the built-in board)
    config: Option<PathBuf>,
    /// Print every slot once and exit
    #[arg(long)]
    once: bool,
    /// Freeze the clock at this local date-time, e.g. 2025-06-05T09:30
    #[arg(long, value_name = "DATETIME")]
    at: Option<String>,
    /// Milliseconds between refresh ticks (overrides the board file)
    #[arg(long, value_name = "MS")]
    interval_ms: Option<u64>,
}

const LOG_FILE_NAME: &str = "dayspan.log";

/// Sends logs to the first writable log file. Without one, logging is off:
/// stdout belongs to slot output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let mut skipped = Vec::new();
    let opened = log_file_candidates()
        .into_iter()
        .find_map(|path| match open_append(&path) {
            Ok(file) => Some((path, file)),
            Err(err) => {
                skipped.push(format!("{}: {err}", path.display()));
                None
            }
        });

    let Some((path, file)) = opened else {
        tracing_subscriber::registry().with(filter).init();
        return;
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(filter)
        .init();
    tracing::info!(path = %path.display(), "Logging initialized");
    for entry in skipped {
        tracing::warn!("Log file unavailable, {entry}");
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// `~/.dayspan/logs/dayspan.log`, then `./.dayspan/logs/dayspan.log`.
fn log_file_candidates() -> Vec<PathBuf> {
    let home = config_path()
        .as_deref()
        .and_then(Path::parent)
        .map(|dir| dir.join("logs").join(LOG_FILE_NAME));
    let local = Path::new(".dayspan").join("logs").join(LOG_FILE_NAME);

    home.into_iter().chain(iter::once(local)).collect()
}

fn clock_from_cli(at: Option<&str>) -> Result<Box<dyn Clock + Send>> {
    match at {
        Some(raw) => {
            let now = parse_target_datetime(raw)
                .with_context(|| format!("invalid --at value `{raw}`"))?;
            tracing::info!(%now, "Using frozen clock");
            Ok(Box::new(ManualClock::at(now)))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let board = Board::load(cli.config.as_deref()).context("failed to load board")?;
    let interval = match cli.interval_ms {
        Some(0) => bail!("--interval-ms must be greater than zero"),
        Some(ms) => Duration::from_millis(ms),
        None => board.interval(),
    };
    let clock = clock_from_cli(cli.at.as_deref())?;
    let mut driver = Driver::new(board, clock, LineSink::new(io::stdout()));

    if cli.once {
        driver.tick()?;
        return Ok(());
    }

    let refresh = RefreshHandle::spawn(driver, interval);
    let stop = refresh.stop_token();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Interrupt received, stopping");
                stop.cancel();
            }
            Err(err) => tracing::warn!(%err, "Failed to listen for Ctrl-C"),
        }
    });

    let stats = refresh.join().await?;
    tracing::info!(
        ticks = stats.ticks,
        writes = stats.writes,
        skipped = stats.skipped,
        "Exiting"
    );

    Ok(())
}
