use serde::Serialize;
use std::path::PathBuf;

use crate::bundle::loader::{HTML_LOADER, LoaderRule, LoaderStep};
use crate::mode::BuildMode;

/// HTML generation plugin options
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HtmlPluginOptions {
    /// Template the page is generated from (relative to the project root)
    pub template: PathBuf,

    /// Output filename for the generated page (default: "index.html")
    pub filename: String,
}

/// Rule for `.html` imports; markup is minimized in production only.
pub(crate) fn markup_rule(mode: BuildMode) -> LoaderRule {
    LoaderRule::new(["html"])
        .step(LoaderStep::new(HTML_LOADER).with_option("minimize", mode.is_production()))
}
