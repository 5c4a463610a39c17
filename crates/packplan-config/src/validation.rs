//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::path::{Path, PathBuf};

use crate::bundle::{BuildConfig, ModeSettings, PluginSpec};
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use packplan_config::{assemble, BuildMode, ConfigValidator, ResolveInputs, SchemaValidator};
///
/// let config = assemble(&ResolveInputs::new("/project", BuildMode::Production)).unwrap();
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        if config.entry.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        for (name, path) in &config.entry {
            if name.trim().is_empty() || path.as_os_str().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "entry names and paths cannot be empty".to_string(),
                    hint: Some("Set 'entry_name' and 'entry' in packplan.toml".to_string()),
                });
            }
        }

        if config.output.filename.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "output filename cannot be empty".to_string(),
                hint: Some("Set 'bundle_filename' in packplan.toml".to_string()),
            });
        }

        for (index, rule) in config.module.rules.iter().enumerate() {
            if rule.test.is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("module rule {index} matches no file extensions"),
                    hint: None,
                });
            }
            if rule.uses.is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("module rule {index} has no loader steps"),
                    hint: None,
                });
            }
        }

        match &config.settings {
            ModeSettings::Production(optimization) if optimization.minimizer.is_empty() => {
                Err(ConfigError::SchemaValidation {
                    message: "production builds need at least one minimizer".to_string(),
                    hint: None,
                })
            }
            ModeSettings::Development(dev) if dev.content_base.as_os_str().is_empty() => {
                Err(ConfigError::SchemaValidation {
                    message: "dev server content base cannot be empty".to_string(),
                    hint: Some("Set 'out_dir' in packplan.toml".to_string()),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Filesystem validator (for CLI use)
///
/// Checks that entry points and the HTML template exist under the project root.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        for path in config.entry.values() {
            let path = self.root.join(path);
            if !path.exists() {
                return Err(ConfigError::EntryNotFound { path });
            }
        }

        for plugin in &config.plugins {
            if let PluginSpec::Html(options) = plugin {
                let path = self.root.join(&options.template);
                if !path.exists() {
                    return Err(ConfigError::TemplateNotFound { path });
                }
            }
        }

        Ok(())
    }
}

pub fn validate_schema(config: &BuildConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

pub fn validate_fs(config: &BuildConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
