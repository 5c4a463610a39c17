//! Build mode selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The environment a configuration is resolved for.
///
/// Every mode-dependent branch of the resolver keys off this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Development,
    Production,
}

impl BuildMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }

    /// Legacy parsing: anything other than `production` is development.
    ///
    /// Unrecognized values are accepted with a warning so existing callers
    /// that pass ad-hoc flags (e.g. `staging`) keep their old behavior.
    pub fn from_flag_lenient(value: &str) -> Self {
        match value.parse() {
            Ok(mode) => mode,
            Err(_) => {
                tracing::warn!(
                    mode = value,
                    "unrecognized build mode, falling back to development"
                );
                Self::Development
            }
        }
    }
}

impl FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(ConfigError::UnknownMode {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
