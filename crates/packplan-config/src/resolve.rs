//! Build configuration resolution.
//!
//! Resolution runs in two stages: [`ResolveInputs::gather`] reads the
//! environment and filesystem, then [`assemble`] turns those inputs into a
//! [`BuildConfig`] without any further I/O.

use std::path::Path;

use crate::bundle::{
    BuildConfig, CssExtractOptions, CssMinimizerOptions, CssPurgeOptions, EntryMap,
    HtmlPluginOptions, ModeSettings, ModuleRules, Optimization, OutputSpec, PluginChain,
    PluginSpec, asset_rule, markup_rule, script_rule, style_rule,
};
use crate::dev::DevServerConfig;
use crate::error::Result;
use crate::inputs::{Argv, ResolveInputs};
use crate::mode::BuildMode;

pub fn is_production(mode: BuildMode) -> bool {
    mode.is_production()
}

/// Gather inputs for the project at `root` and assemble its configuration.
///
/// # Example
///
/// ```no_run
/// use packplan_config::{resolve_config, Argv, BuildMode};
///
/// let config = resolve_config(".", BuildMode::Production, Argv::new()).unwrap();
/// assert!(config.dev_server().is_none());
/// ```
pub fn resolve_config(root: impl AsRef<Path>, mode: BuildMode, argv: Argv) -> Result<BuildConfig> {
    let inputs = ResolveInputs::gather(root, mode, argv)?;
    assemble(&inputs)
}

/// Assemble a configuration from already-gathered inputs.
///
/// # Example
///
/// ```
/// use packplan_config::{assemble, BuildMode, ResolveInputs};
///
/// let inputs = ResolveInputs::new("/project", BuildMode::Development);
/// let config = assemble(&inputs).unwrap();
/// assert!(config.dev_server().unwrap().history_api_fallback);
/// ```
pub fn assemble(inputs: &ResolveInputs) -> Result<BuildConfig> {
    let mode = inputs.mode;
    let layout = &inputs.layout;
    let out_dir = inputs.root.join(&layout.out_dir);

    let mut entry = EntryMap::new();
    entry.insert(layout.entry_name.clone(), layout.entry.clone());

    let output = OutputSpec {
        filename: layout.bundle_filename.clone(),
        path: out_dir.clone(),
    };

    let module = ModuleRules {
        rules: vec![
            script_rule(),
            style_rule(mode),
            asset_rule(),
            markup_rule(mode),
        ],
    };

    let mut plugins = PluginChain::new();
    plugins
        .push(PluginSpec::Html(HtmlPluginOptions {
            template: layout.template.clone(),
            filename: layout.html_filename.clone(),
        }))?
        .push(PluginSpec::CssExtract(CssExtractOptions {
            filename: layout.css_filename.clone(),
        }))?
        .push(PluginSpec::CssPurge(CssPurgeOptions {
            paths: inputs.purge_paths.clone(),
        }))?;

    let settings = if is_production(mode) {
        ModeSettings::Production(Optimization {
            minimizer: vec![PluginSpec::CssMinimizer(CssMinimizerOptions::default())],
        })
    } else {
        ModeSettings::Development(
            DevServerConfig::new(out_dir).with_env(&inputs.dev_server_env),
        )
    };

    tracing::debug!(%mode, plugins = plugins.len(), "assembled build configuration");

    Ok(BuildConfig {
        mode,
        entry,
        output,
        module,
        plugins,
        settings,
        devtool: None,
    })
}
