//! Error handling for the packplan CLI.
//!
//! `CliError` wraps the library's [`ConfigError`] and the failures that only
//! happen at the command-line layer. Errors are converted to `miette`
//! reports in `main` for display.

use std::path::PathBuf;

use packplan_config::ConfigError;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Resolution or validation failures from the config crate
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failed to write the resolved configuration
    #[error("Failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Config(err) => err.hint(),
            Self::WriteOutput { .. } => Some("Check that the output directory exists and is writable"),
            _ => None,
        }
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert a CliError to a miette Report, attaching its hint when present.
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match err.hint() {
        Some(hint) => miette::miette!(help = hint.to_string(), "{}", err),
        None => miette::miette!("{}", err),
    }
}
