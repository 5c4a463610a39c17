use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

pub const BABEL_LOADER: &str = "babel-loader";
pub const STYLE_LOADER: &str = "style-loader";
pub const CSS_EXTRACT_LOADER: &str = "mini-css-extract-plugin/dist/loader";
pub const CSS_LOADER: &str = "css-loader";
pub const POSTCSS_LOADER: &str = "postcss-loader";
pub const SASS_LOADER: &str = "sass-loader";
pub const FILE_LOADER: &str = "file-loader";
pub const HTML_LOADER: &str = "html-loader";

/// Option key the bundler's loaders use for source-map emission.
pub const SOURCE_MAP_OPTION: &str = "sourceMap";

/// A single named transformation applied to matched files.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoaderStep {
    pub loader: String,

    #[serde(skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,
}

impl LoaderStep {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: Map::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// The step's `sourceMap` option, if it has one.
    pub fn source_map(&self) -> Option<bool> {
        self.options.get(SOURCE_MAP_OPTION).and_then(Value::as_bool)
    }
}

/// Matcher, exclusions and transformation chain for one class of files.
///
/// Steps are listed in declaration order; the bundler applies them
/// last-to-first, so the head of `uses` sees the output of every other step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoaderRule {
    /// File extensions (without the leading dot) this rule applies to
    pub test: Vec<String>,

    /// Directory names that exclude a file from this rule
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    #[serde(rename = "use")]
    pub uses: Vec<LoaderStep>,
}

impl LoaderRule {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            test: extensions.into_iter().map(Into::into).collect(),
            exclude: Vec::new(),
            uses: Vec::new(),
        }
    }

    pub fn exclude(mut self, dir: impl Into<String>) -> Self {
        self.exclude.push(dir.into());
        self
    }

    pub fn step(mut self, step: LoaderStep) -> Self {
        self.uses.push(step);
        self
    }

    /// First step in declaration order (the last one to run).
    pub fn head(&self) -> Option<&LoaderStep> {
        self.uses.first()
    }

    /// Steps in the order the bundler executes them.
    pub fn application_order(&self) -> impl Iterator<Item = &LoaderStep> {
        self.uses.iter().rev()
    }

    pub fn handles_extension(&self, ext: &str) -> bool {
        self.test.iter().any(|t| t.eq_ignore_ascii_case(ext))
    }

    pub fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        if !self.handles_extension(ext) {
            return false;
        }

        !path.components().any(|component| {
            let component = component.as_os_str();
            self.exclude.iter().any(|dir| component == dir.as_str())
        })
    }
}

/// The bundler's `module` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModuleRules {
    pub rules: Vec<LoaderRule>,
}

impl ModuleRules {
    /// Rules that apply to `path`, in declaration order.
    pub fn rules_for<'a>(&'a self, path: &'a Path) -> impl Iterator<Item = &'a LoaderRule> + 'a {
        self.rules.iter().filter(move |rule| rule.matches(path))
    }

    /// Rule handling the given extension, if any.
    pub fn rule_for_extension(&self, ext: &str) -> Option<&LoaderRule> {
        self.rules.iter().find(|rule| rule.handles_extension(ext))
    }

    pub fn steps(&self) -> impl Iterator<Item = &LoaderStep> {
        self.rules.iter().flat_map(|rule| rule.uses.iter())
    }
}

pub(crate) fn script_rule() -> LoaderRule {
    LoaderRule::new(["js", "jsx"])
        .exclude("node_modules")
        .step(LoaderStep::new(BABEL_LOADER))
}

pub(crate) fn asset_rule() -> LoaderRule {
    LoaderRule::new([
        "png", "jpg", "jpeg", "gif", "svg", "woff", "woff2", "ttf", "eot",
    ])
    .step(
        LoaderStep::new(FILE_LOADER)
            .with_option("name", "[name].[ext]")
            .with_option("outputPath", "assets/"),
    )
}
