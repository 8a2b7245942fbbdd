//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The TUI owns stdout and stderr while it runs, so logs only ever go to a
//! file. Without a log file no subscriber is installed and every `tracing`
//! macro is a no-op.
//!
//! # Log Levels
//!
//! - `warn`: degraded paths (unknown launch sheet, bad log filter)
//! - `info`: start-up and shutdown
//! - `debug`: navigation, toggles, commands
//!
//! Filtering follows `RUST_LOG`, defaulting to [`DEFAULT_FILTER`].

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{SdError, SdResult};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// `RUST_LOG` if it parses, otherwise [`DEFAULT_FILTER`].
pub fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Open `path` for appending, creating it if needed.
pub fn open_log_file(path: &Path) -> SdResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| SdError::io(format!("open log file {}", path.display()), e))
}

/// Subscriber that writes plain (non-ANSI) lines to `file`.
pub fn build_subscriber(file: File, filter: EnvFilter) -> impl Subscriber + Send + Sync {
    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);
    tracing_subscriber::registry().with(filter).with(layer)
}

/// Install the global subscriber when a log file is configured.
///
/// Returns whether a subscriber was installed.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(path: Option<&Path>) -> SdResult<bool> {
    let Some(path) = path else {
        return Ok(false);
    };
    let file = open_log_file(path)?;
    // Fails only when a global subscriber already exists
    let installed = build_subscriber(file, build_env_filter()).try_init().is_ok();
    Ok(installed)
}
