//! packplan CLI - resolve bundler configuration from the command line.
//!
//! - [`cli`] - Argument definitions
//! - [`commands`] - Command implementations
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Terminal status output

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
