//! `tracing` subscriber setup
//!
//! The TUI owns the terminal, so interactive sessions only log when a log
//! file is configured. Batch runs log to stderr by default.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log level '{level}': {source}")]
    Filter {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("failed to open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to install logger: {0}")]
    Install(String),
}

/// Where log events are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    Disabled,
}

impl LogTarget {
    /// A file when one is given, otherwise stderr for batch runs and nothing
    /// for the TUI
    pub fn select(log_file: Option<&Path>, batch: bool) -> Self {
        match log_file {
            Some(path) => LogTarget::File(path.to_path_buf()),
            None if batch => LogTarget::Stderr,
            None => LogTarget::Disabled,
        }
    }
}

/// Build the filter from, in order of precedence, the `--log-level` flag,
/// `RUST_LOG`, and the configured level.
pub fn filter(cli_level: Option<&str>, config_level: &str) -> Result<EnvFilter, LoggingError> {
    let level = match cli_level {
        Some(level) => level,
        None => {
            if let Ok(filter) = EnvFilter::try_from_default_env() {
                return Ok(filter);
            }
            config_level
        }
    };
    EnvFilter::try_new(level).map_err(|source| LoggingError::Filter {
        level: level.to_string(),
        source,
    })
}

/// Install the global subscriber
pub fn init(
    cli_level: Option<&str>,
    config_level: &str,
    target: &LogTarget,
) -> Result<(), LoggingError> {
    let builder = tracing_subscriber::fmt().with_env_filter(filter(cli_level, config_level)?);

    let result = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::Open {
                    path: path.clone(),
                    source,
                })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    result.map_err(|err| LoggingError::Install(err.to_string()))
}
