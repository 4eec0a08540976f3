//! File-only tracing setup.
//!
//! The TUI owns the terminal, so logs never go to stdout or stderr. Without a
//! log file no subscriber is installed and the `tracing` macros are no-ops.

use crate::config::LogConfig;
use crate::error::AppError;
use std::fs::OpenOptions;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter: explicit directives first, then `RUST_LOG`, then `info`.
pub fn filter(level: Option<&str>) -> Result<EnvFilter, AppError> {
    match level {
        Some(directives) => Ok(EnvFilter::try_new(directives)?),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))),
    }
}

/// Install the global subscriber. Returns `false` when logging is disabled.
pub fn init(settings: &LogConfig) -> Result<bool, AppError> {
    let Some(path) = &settings.file else {
        return Ok(false);
    };

    let filter = filter(settings.level.as_deref())?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::Log {
            path: path.clone(),
            source,
        })?;

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;
    Ok(true)
}
