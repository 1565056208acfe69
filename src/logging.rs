//! File logging. The terminal belongs to the TUI, so nothing is written to
//! stdout or stderr.
//!
//! Call `logging::init()` at the start of `main` and keep the returned guard
//! alive until exit so buffered lines are flushed.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

#[allow(dead_code)]
pub struct LogGuard(tracing_appender::non_blocking::WorkerGuard);

/// `~/.cache/portico/portico.log`
#[must_use]
pub fn log_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".cache");
        path.push("portico");
        path.push("portico.log");
        path
    })
}

/// Installs the global subscriber. `RUST_LOG` overrides the default `info`
/// filter.
pub fn init() -> Result<LogGuard> {
    let path = log_path().context("could not determine the home directory")?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening {}", path.display()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let env_filter = match std::env::var("RUST_LOG") {
        Ok(val) => tracing_subscriber::EnvFilter::new(val),
        Err(_) => tracing_subscriber::EnvFilter::new("info"),
    };
    // Plain formatting, no ANSI codes in the file
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("installing the tracing subscriber")?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(LogGuard(guard))
}
