use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use tally_core::ProgramError;

/// Everything that can stop the `tally` binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Program(#[from] ProgramError),

    #[error("failed to open log file '{path}': {source}")]
    Log {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("failed to install log subscriber: {0}")]
    LogInit(#[from] tracing_subscriber::util::TryInitError),
}
