//! Input gathering: everything the resolver reads from the outside world.
//!
//! [`ResolveInputs::gather`] is the only place that reads the process
//! environment or the filesystem, and it never writes to either. Assembly works on the gathered values
//! alone, so it can be exercised without either.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use walkdir::WalkDir;

use crate::error::{ConfigError, Result};
use crate::layout::ProjectLayout;
use crate::mode::BuildMode;

pub const HOST_VAR: &str = "WDS_HOST";
pub const PORT_VAR: &str = "WDS_PORT";
pub const DOTENV_FILE: &str = ".env";

/// Arguments the calling tool parsed from its own command line.
///
/// Carried through resolution untouched; nothing in the current rule set
/// depends on them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Argv(IndexMap<String, Value>);

impl Argv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build from `key=value` pairs; a bare `key` becomes `true`.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut argv = Self::new();
        for pair in pairs {
            match pair.as_ref().split_once('=') {
                Some((key, value)) => argv.insert(key, value),
                None => argv.insert(pair.as_ref(), true),
            }
        }
        argv
    }
}

/// Dev-server settings sourced from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DevServerEnv {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl DevServerEnv {
    /// Process variables first, then values read from the project's `.env`.
    pub fn from_process(dotenv: &DotenvVars) -> Self {
        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| dotenv.get(key).cloned()))
    }

    /// Read settings through `lookup`. Missing values stay `None` so the
    /// dev server applies its own defaults; an unparseable port is dropped
    /// with a warning rather than failing resolution.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup(HOST_VAR);
        let port = lookup(PORT_VAR).and_then(|raw| match raw.trim().parse::<u16>() {
            Ok(port) => Some(port),
            Err(err) => {
                tracing::warn!(var = PORT_VAR, value = %raw, error = %err, "ignoring invalid port");
                None
            }
        });

        Self { host, port }
    }
}

/// Variables read from a project's `.env` file, in file order.
pub type DotenvVars = IndexMap<String, String>;

/// Read `<root>/.env` without touching the process environment.
///
/// A missing file is normal; an unreadable or malformed one is logged and
/// skipped as a whole.
pub fn read_dotenv(root: &Path) -> DotenvVars {
    let path = root.join(DOTENV_FILE);
    let iter = match dotenvy::from_path_iter(&path) {
        Ok(iter) => iter,
        Err(err) if err.not_found() => return DotenvVars::new(),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "skipping environment file");
            return DotenvVars::new();
        }
    };

    match iter.collect::<std::result::Result<DotenvVars, _>>() {
        Ok(vars) => {
            tracing::debug!(path = %path.display(), vars = vars.len(), "read environment file");
            vars
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "skipping environment file");
            DotenvVars::new()
        }
    }
}

/// Collect every file under `src_dir`, sorted, skipping hidden entries.
///
/// The walk is synchronous so the result is complete before assembly
/// starts. A missing directory yields an empty list.
pub fn scan_sources(src_dir: &Path) -> Result<Vec<PathBuf>> {
    if !src_dir.exists() {
        tracing::debug!(path = %src_dir.display(), "source directory missing, nothing to scan");
        return Ok(Vec::new());
    }

    let walker = WalkDir::new(src_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()));

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| ConfigError::SourceScan {
            path: src_dir.to_path_buf(),
            source,
        })?;

        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if is_file {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|n| n.starts_with('.'))
}

/// Everything assembly needs, gathered up front.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveInputs {
    /// Absolute project root
    pub root: PathBuf,
    pub mode: BuildMode,
    pub argv: Argv,
    pub layout: ProjectLayout,
    pub dev_server_env: DevServerEnv,
    /// Source files handed to the CSS purge plugin
    pub purge_paths: Vec<PathBuf>,
}

impl ResolveInputs {
    /// Inputs with default layout, no environment and no scanned files.
    pub fn new(root: impl Into<PathBuf>, mode: BuildMode) -> Self {
        Self {
            root: root.into(),
            mode,
            argv: Argv::new(),
            layout: ProjectLayout::default(),
            dev_server_env: DevServerEnv::default(),
            purge_paths: Vec::new(),
        }
    }

    /// Read `.env`, the layout, dev-server variables and the source tree.
    pub fn gather(root: impl AsRef<Path>, mode: BuildMode, argv: Argv) -> Result<Self> {
        let root = std::path::absolute(root.as_ref())?;

        let dotenv = read_dotenv(&root);
        let layout = ProjectLayout::load(&root)?;
        let dev_server_env = DevServerEnv::from_process(&dotenv);
        let purge_paths = scan_sources(&root.join(&layout.src_dir))?;

        tracing::debug!(
            root = %root.display(),
            %mode,
            host = ?dev_server_env.host,
            port = ?dev_server_env.port,
            sources = purge_paths.len(),
            "gathered resolver inputs"
        );

        Ok(Self {
            root,
            mode,
            argv,
            layout,
            dev_server_env,
            purge_paths,
        })
    }

    pub fn with_argv(mut self, argv: Argv) -> Self {
        self.argv = argv;
        self
    }

    pub fn with_layout(mut self, layout: ProjectLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_dev_server_env(mut self, env: DevServerEnv) -> Self {
        self.dev_server_env = env;
        self
    }

    pub fn with_purge_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.purge_paths = paths;
        self
    }
}
