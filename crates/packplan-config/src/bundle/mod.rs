//! Configuration types handed to the external bundler.

mod css;
mod html;
mod loader;
mod plugin;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::path::PathBuf;

pub use css::{CssExtractOptions, CssMinimizerOptions, CssPurgeOptions};
pub use html::HtmlPluginOptions;
pub use loader::{
    BABEL_LOADER, CSS_EXTRACT_LOADER, CSS_LOADER, FILE_LOADER, HTML_LOADER, LoaderRule,
    LoaderStep, ModuleRules, POSTCSS_LOADER, SASS_LOADER, SOURCE_MAP_OPTION, STYLE_LOADER,
};
pub use plugin::{PluginChain, PluginSpec};

pub(crate) use css::style_rule;
pub(crate) use html::markup_rule;
pub(crate) use loader::{asset_rule, script_rule};

use crate::dev::DevServerConfig;
use crate::mode::BuildMode;

/// Bundle name -> entry module.
pub type EntryMap = IndexMap<String, PathBuf>;

/// Where and under what name the bundle is written.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct OutputSpec {
    pub filename: String,

    /// Absolute output directory
    pub path: PathBuf,
}

/// Minification settings (production only)
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Optimization {
    pub minimizer: Vec<PluginSpec>,
}

/// The mode-specific half of a configuration.
///
/// Exactly one of `optimization` / `devServer` carries settings; the other
/// is serialized as an empty object.
#[derive(Debug, Clone, PartialEq)]
pub enum ModeSettings {
    Production(Optimization),
    Development(DevServerConfig),
}

#[derive(serde::Serialize)]
struct EmptyBlock {}

impl Serialize for ModeSettings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            Self::Production(optimization) => {
                map.serialize_entry("optimization", optimization)?;
                map.serialize_entry("devServer", &EmptyBlock {})?;
            }
            Self::Development(dev_server) => {
                map.serialize_entry("optimization", &EmptyBlock {})?;
                map.serialize_entry("devServer", dev_server)?;
            }
        }
        map.end()
    }
}

/// A fully resolved bundler configuration.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BuildConfig {
    pub mode: BuildMode,

    pub entry: EntryMap,

    pub output: OutputSpec,

    pub module: ModuleRules,

    pub plugins: PluginChain,

    #[serde(flatten)]
    pub settings: ModeSettings,

    /// Source-map style; absent lets the bundler pick its per-mode default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devtool: Option<String>,
}

impl BuildConfig {
    pub fn optimization(&self) -> Option<&Optimization> {
        match &self.settings {
            ModeSettings::Production(optimization) => Some(optimization),
            ModeSettings::Development(_) => None,
        }
    }

    pub fn dev_server(&self) -> Option<&DevServerConfig> {
        match &self.settings {
            ModeSettings::Development(dev_server) => Some(dev_server),
            ModeSettings::Production(_) => None,
        }
    }

    /// Rule for stylesheets, if the rule set has one.
    pub fn style_rule(&self) -> Option<&LoaderRule> {
        self.module.rule_for_extension("css")
    }

    /// Convert to the JSON document the bundler consumes.
    pub fn to_value(&self) -> Result<serde_json::Value, crate::error::ConfigError> {
        serde_json::to_value(self).map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn to_json_string(&self, pretty: bool) -> Result<String, crate::error::ConfigError> {
        let rendered = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        rendered.map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }
}
