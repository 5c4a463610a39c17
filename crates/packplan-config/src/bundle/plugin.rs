use serde::Serialize;

use crate::bundle::css::{CssExtractOptions, CssMinimizerOptions, CssPurgeOptions};
use crate::bundle::html::HtmlPluginOptions;
use crate::error::{ConfigError, Result};

/// A plugin instance and its options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "plugin", content = "options", rename_all = "kebab-case")]
pub enum PluginSpec {
    Html(HtmlPluginOptions),
    CssExtract(CssExtractOptions),
    CssPurge(CssPurgeOptions),
    CssMinimizer(CssMinimizerOptions),
}

impl PluginSpec {
    pub const HTML: &'static str = "html";
    pub const CSS_EXTRACT: &'static str = "css-extract";
    pub const CSS_PURGE: &'static str = "css-purge";
    pub const CSS_MINIMIZER: &'static str = "css-minimizer";

    pub fn name(&self) -> &'static str {
        match self {
            Self::Html(_) => Self::HTML,
            Self::CssExtract(_) => Self::CSS_EXTRACT,
            Self::CssPurge(_) => Self::CSS_PURGE,
            Self::CssMinimizer(_) => Self::CSS_MINIMIZER,
        }
    }

    /// Plugin that must already be in the chain before this one is added.
    fn requires(&self) -> Option<&'static str> {
        match self {
            // Purging reads the stylesheet the extraction plugin emits
            Self::CssPurge(_) => Some(Self::CSS_EXTRACT),
            _ => None,
        }
    }
}

/// Ordered plugin list.
///
/// Invariant: every plugin's prerequisite appears earlier in the chain, so
/// `css-purge` always follows `css-extract`. [`PluginChain::push`] is the
/// only way to grow the chain and rejects out-of-order additions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PluginChain {
    plugins: Vec<PluginSpec>,
}

impl PluginChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, plugin: PluginSpec) -> Result<&mut Self> {
        if let Some(requires) = plugin.requires() {
            if self.position(requires).is_none() {
                return Err(ConfigError::PluginOrder {
                    plugin: plugin.name(),
                    requires,
                });
            }
        }

        self.plugins.push(plugin);
        Ok(self)
    }

    /// Builder-style [`PluginChain::push`].
    pub fn with(mut self, plugin: PluginSpec) -> Result<Self> {
        self.push(plugin)?;
        Ok(self)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.plugins.iter().position(|p| p.name() == name)
    }

    pub fn get(&self, name: &str) -> Option<&PluginSpec> {
        self.plugins.iter().find(|p| p.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PluginSpec> {
        self.plugins.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(PluginSpec::name).collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl<'a> IntoIterator for &'a PluginChain {
    type Item = &'a PluginSpec;
    type IntoIter = std::slice::Iter<'a, PluginSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn extract() -> PluginSpec {
        PluginSpec::CssExtract(CssExtractOptions {
            filename: "index.css".to_string(),
        })
    }

    fn purge() -> PluginSpec {
        PluginSpec::CssPurge(CssPurgeOptions {
            paths: vec![PathBuf::from("src/index.js")],
        })
    }

    #[test]
    fn purge_before_extract_is_rejected() {
        let mut chain = PluginChain::new();
        let err = chain.push(purge()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::PluginOrder {
                plugin: "css-purge",
                requires: "css-extract"
            }
        ));
        assert!(chain.is_empty());
    }

    #[test]
    fn purge_after_extract_is_accepted() {
        let chain = PluginChain::new()
            .with(extract())
            .and_then(|c| c.with(purge()))
            .unwrap();
        assert_eq!(chain.names(), ["css-extract", "css-purge"]);
        assert!(chain.position(PluginSpec::CSS_PURGE) > chain.position(PluginSpec::CSS_EXTRACT));
    }

    #[test]
    fn serializes_as_tagged_list() {
        let chain = PluginChain::new()
            .with(extract())
            .and_then(|c| c.with(PluginSpec::CssMinimizer(CssMinimizerOptions::default())))
            .unwrap();

        assert_eq!(
            serde_json::to_value(&chain).unwrap(),
            json!([
                { "plugin": "css-extract", "options": { "filename": "index.css" } },
                { "plugin": "css-minimizer", "options": {} }
            ])
        );
    }
}
