//! Command-line interface definition for packplan.
//!
//! # Command Structure
//!
//! - `packplan resolve` - Resolve the bundler configuration and print it as JSON
//! - `packplan check` - Resolve and validate against the project tree

mod commands;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, ModeArgs, ResolveArgs};
pub use validation::parse_argv_pair;

/// packplan - build configuration resolver for JavaScript bundlers
#[derive(Parser, Debug)]
#[command(
    name = "packplan",
    version,
    about = "Resolve bundler configuration for a build mode",
    long_about = "packplan assembles the entry points, loader rules, plugins, optimization and\n\
                  dev-server settings a JavaScript bundler needs for a development or\n\
                  production build, and prints them as JSON."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
