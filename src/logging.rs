//! Logging setup
//!
//! Every run appends JSON lines to `<home>/.aigc/log/<YYYY-MM-DD>.log`.
//! Debug mode lowers the level to DEBUG and mirrors events on stderr.
//! `AIGC_LOG` (EnvFilter syntax) replaces the default filter.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{Local, NaiveDate};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::{AigcError, Result};

/// Environment variable overriding the log filter
pub const LOG_ENV: &str = "AIGC_LOG";

/// Log file for `date` inside `log_dir`
pub fn log_file_path(log_dir: &Path, date: NaiveDate) -> PathBuf {
    log_dir.join(format!("{}.log", date.format("%Y-%m-%d")))
}

/// Opens (creating if needed) the log file for `date` in append mode
fn open_log_file(log_dir: &Path, date: NaiveDate) -> Result<(PathBuf, File)> {
    fs::create_dir_all(log_dir)?;
    let path = log_file_path(log_dir, date);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Default filter: our own events at `info` (or `debug`), dependencies at `warn`
fn default_filter(debug: bool) -> EnvFilter {
    let level = if debug { "debug" } else { "info" };
    EnvFilter::new(format!("warn,aigc={}", level))
}

/// Installs the global subscriber
///
/// Returns the path of today's log file.
pub fn init(log_dir: &Path, debug: bool) -> Result<PathBuf> {
    let (path, file) = open_log_file(log_dir, Local::now().date_naive())?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter(debug));

    let file_layer = fmt::layer()
        .json()
        .with_timer(ChronoLocal::rfc_3339())
        .with_current_span(false)
        .with_span_list(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file));

    let console_layer = debug.then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| AigcError::Config(format!("failed to initialize logging: {}", e)))?;

    tracing::debug!("Logging to {}", path.display());
    Ok(path)
}
