//! Check command implementation.
//!
//! Resolves the configuration and validates it against the project tree
//! without writing anything.

use packplan_config::{
    Argv, ConfigValidator, FsValidator, PluginSpec, resolve_config,
};

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Parse the build mode
/// 2. Resolve the configuration (reads .env, packplan.toml, src/)
/// 3. Validate schema and check that entries and the HTML template exist
pub fn execute(args: CheckArgs) -> Result<()> {
    let mode = args.mode.build_mode()?;
    ui::info(&format!("Checking {mode} configuration..."));

    let config = resolve_config(&args.mode.root, mode, Argv::new())?;

    if let Some(PluginSpec::CssPurge(purge)) = config.plugins.get(PluginSpec::CSS_PURGE) {
        if purge.paths.is_empty() {
            ui::warning("No source files found; the CSS purge step will drop every rule");
        }
    }

    if let Err(err) = FsValidator::new(&args.mode.root).validate(&config) {
        ui::error(&err.to_string());
        return Err(err.into());
    }

    for (name, path) in &config.entry {
        ui::success(&format!("  entry '{name}' -> {}", path.display()));
    }
    ui::success("Configuration is valid!");
    Ok(())
}
