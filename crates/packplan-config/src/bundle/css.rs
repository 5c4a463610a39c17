use serde::Serialize;
use std::path::PathBuf;

use crate::bundle::loader::{
    CSS_EXTRACT_LOADER, CSS_LOADER, LoaderRule, LoaderStep, POSTCSS_LOADER, SASS_LOADER,
    SOURCE_MAP_OPTION, STYLE_LOADER,
};
use crate::mode::BuildMode;

/// CSS extraction plugin options
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CssExtractOptions {
    /// Output file for the extracted stylesheet (relative to the output dir)
    pub filename: String,
}

/// CSS purge plugin options
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CssPurgeOptions {
    /// Files whose contents decide which style rules are kept
    pub paths: Vec<PathBuf>,
}

/// CSS minimizer options (the minimizer runs with its own defaults)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CssMinimizerOptions {}

/// Style rule for `.css`, `.scss` and `.sass` files.
///
/// Production writes styles to a separate file; development injects them
/// into the page. Source maps follow the mode on every step that emits them.
pub(crate) fn style_rule(mode: BuildMode) -> LoaderRule {
    let source_map = !mode.is_production();

    let head = if mode.is_production() {
        LoaderStep::new(CSS_EXTRACT_LOADER)
    } else {
        LoaderStep::new(STYLE_LOADER)
    };

    LoaderRule::new(["css", "scss", "sass"])
        .step(head)
        .step(
            LoaderStep::new(CSS_LOADER)
                .with_option(SOURCE_MAP_OPTION, source_map)
                .with_option("importLoaders", 2),
        )
        .step(LoaderStep::new(POSTCSS_LOADER).with_option(SOURCE_MAP_OPTION, source_map))
        .step(LoaderStep::new(SASS_LOADER).with_option(SOURCE_MAP_OPTION, source_map))
}
