use clap::{Args, Subcommand};
use std::path::PathBuf;

use packplan_config::{BuildMode, ConfigError};

use crate::cli::validation::parse_argv_pair;

/// Available packplan subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the configuration and print it as JSON
    ///
    /// Reads `.env`, WDS_HOST / WDS_PORT, packplan.toml and the source tree,
    /// then emits the configuration the bundler consumes.
    Resolve(ResolveArgs),

    /// Resolve the configuration and validate it against the project
    ///
    /// Checks that entry points and the HTML template exist.
    Check(CheckArgs),
}

/// Mode selection shared by every command
#[derive(Args, Debug, Clone)]
pub struct ModeArgs {
    /// Build mode: development or production
    #[arg(short, long, env = "NODE_ENV")]
    pub mode: String,

    /// Treat unknown modes as development instead of failing
    #[arg(long)]
    pub lenient_mode: bool,

    /// Project root
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,
}

impl ModeArgs {
    pub fn build_mode(&self) -> Result<BuildMode, ConfigError> {
        if self.lenient_mode {
            Ok(BuildMode::from_flag_lenient(&self.mode))
        } else {
            self.mode.parse()
        }
    }
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub mode: ModeArgs,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Write the configuration to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Arguments passed through to the configuration (key=value)
    #[arg(value_name = "ARG", value_parser = parse_argv_pair)]
    pub argv: Vec<String>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub mode: ModeArgs,
}
