//! Project layout: where sources, templates and output live.
//!
//! Values are merged from defaults, an optional `packplan.toml` in the
//! project root, and `PACKPLAN_`-prefixed environment variables, in that
//! order of increasing priority.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLayout {
    /// Source tree scanned for the CSS purge allow-list
    #[serde(deserialize_with = "scalar::path")]
    pub src_dir: PathBuf,

    /// Bundle name of the entry point
    #[serde(deserialize_with = "scalar::string")]
    pub entry_name: String,

    /// Entry point, as handed to the bundler
    #[serde(deserialize_with = "scalar::path")]
    pub entry: PathBuf,

    /// HTML template the index page is generated from
    #[serde(deserialize_with = "scalar::path")]
    pub template: PathBuf,

    /// Output directory (relative to the project root)
    #[serde(deserialize_with = "scalar::path")]
    pub out_dir: PathBuf,

    #[serde(deserialize_with = "scalar::string")]
    pub bundle_filename: String,

    #[serde(deserialize_with = "scalar::string")]
    pub css_filename: String,

    #[serde(deserialize_with = "scalar::string")]
    pub html_filename: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            src_dir: PathBuf::from("src"),
            entry_name: "index".to_string(),
            entry: PathBuf::from("./src/index.js"),
            template: PathBuf::from("src/templates/index.html"),
            out_dir: PathBuf::from("dist"),
            bundle_filename: "bundle.js".to_string(),
            css_filename: "index.css".to_string(),
            html_filename: "index.html".to_string(),
        }
    }
}

impl ProjectLayout {
    pub const FILE_NAME: &'static str = "packplan.toml";
    pub const ENV_PREFIX: &'static str = "PACKPLAN_";

    /// Load the layout for the project rooted at `root`.
    ///
    /// Priority: environment variables > packplan.toml > defaults
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let file = root.as_ref().join(Self::FILE_NAME);
        if file.exists() {
            tracing::debug!(path = %file.display(), "loading project layout");
            figment = figment.merge(Toml::file(file));
        }

        figment = figment.merge(Env::prefixed(Self::ENV_PREFIX));

        figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: "layout".to_string(),
            hint: Some(e.to_string()),
        })
    }
}

/// Environment overrides arrive as parsed scalars (`PACKPLAN_OUT_DIR=2024`
/// is a number), but every layout value is text.
mod scalar {
    use std::path::PathBuf;

    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Bool(bool),
    }

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match Scalar::deserialize(deserializer)? {
            Scalar::Text(text) => text,
            Scalar::Unsigned(n) => n.to_string(),
            Scalar::Signed(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        })
    }

    pub fn path<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PathBuf, D::Error> {
        string(deserializer).map(PathBuf::from)
    }
}
