//! Development server configuration types.

use serde::Serialize;
use std::path::PathBuf;

use crate::inputs::DevServerEnv;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerConfig {
    /// Bind host; left to the dev server's default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Bind port; left to the dev server's default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Serve the index page for unknown routes (client-side routing)
    pub history_api_fallback: bool,

    /// Show build errors as an in-page overlay
    pub overlay: bool,

    /// Open a browser tab on start
    pub open: bool,

    /// Directory static content is served from
    pub content_base: PathBuf,
}

impl DevServerConfig {
    pub fn new(content_base: impl Into<PathBuf>) -> Self {
        Self {
            host: None,
            port: None,
            history_api_fallback: default_history_api_fallback(),
            overlay: default_overlay(),
            open: default_open(),
            content_base: content_base.into(),
        }
    }

    pub fn with_env(mut self, env: &DevServerEnv) -> Self {
        self.host = env.host.clone();
        self.port = env.port;
        self
    }
}

fn default_history_api_fallback() -> bool {
    true
}

fn default_overlay() -> bool {
    true
}

fn default_open() -> bool {
    false
}
