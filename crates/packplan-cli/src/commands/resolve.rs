//! Resolve command implementation.

use std::io::Write;

use packplan_config::{Argv, resolve_config};

use crate::cli::ResolveArgs;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the resolve command.
///
/// Gathers inputs for the project root, assembles the configuration for the
/// requested mode and writes it as JSON to stdout or `--output`.
pub fn execute(args: ResolveArgs) -> Result<()> {
    let mode = args.mode.build_mode()?;
    let argv = Argv::from_pairs(&args.argv);

    tracing::info!(%mode, root = %args.mode.root.display(), "resolving configuration");
    let config = resolve_config(&args.mode.root, mode, argv)?;
    let mut rendered = config.to_json_string(args.pretty)?;
    rendered.push('\n');

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered).map_err(|source| CliError::WriteOutput {
                path: path.clone(),
                source,
            })?;
            ui::success(&format!("Wrote {mode} configuration to {}", path.display()));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
