//! Error types for configuration resolution and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown build mode '{value}' (expected 'development' or 'production')")]
    UnknownMode { value: String },

    #[error("plugin '{plugin}' must come after '{requires}' in the plugin chain")]
    PluginOrder {
        plugin: &'static str,
        requires: &'static str,
    },

    // Input gathering errors
    #[error("failed to scan source tree at {}: {source}", .path.display())]
    SourceScan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("invalid config value for '{field}'{}", .hint.as_deref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    // Schema validation errors (no filesystem checks)
    #[error("no entries specified")]
    NoEntries,

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // Filesystem validation errors (for CLI use)
    #[error("entry path not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },

    #[error("HTML template not found: {}", .path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Actionable hint attached to the error, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::InvalidValue { hint, .. } | Self::SchemaValidation { hint, .. } => {
                hint.as_deref()
            }
            Self::UnknownMode { .. } => {
                Some("Pass --lenient-mode to fall back to development for unknown values")
            }
            Self::NoEntries => Some("Set 'entry' in packplan.toml"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_formats_hint() {
        let err = ConfigError::InvalidValue {
            field: "out_dir".to_string(),
            hint: Some("expected a string".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "invalid config value for 'out_dir': expected a string"
        );

        let bare = ConfigError::InvalidValue {
            field: "out_dir".to_string(),
            hint: None,
        };
        assert_eq!(bare.to_string(), "invalid config value for 'out_dir'");
    }

    #[test]
    fn unknown_mode_carries_hint() {
        let err = ConfigError::UnknownMode {
            value: "staging".to_string(),
        };
        assert!(err.to_string().contains("staging"));
        assert!(err.hint().unwrap().contains("--lenient-mode"));
    }
}
