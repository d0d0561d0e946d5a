//! # Client configuration (`taskdeck.toml`)
//!
//! Defines the TOML configuration the web client is built with
//! (filename: [`AppConfig::filename`] = `"taskdeck.toml"`). The base URL of the
//! task API differs between builds, so it lives here instead of in code.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000/api"   # prefix for /auth/* and /todo
//!
//! [session]
//! namespace = ""    # storage key prefix; empty keeps the bare `token`/`user` keys
//! ```
//!
//! All structs derive `Default` so a missing or empty config file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

/// Top-level configuration stored in `taskdeck.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Where the task API lives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: Url,
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_API_BASE_URL).expect("default API base URL is valid")
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Session persistence configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Prefix for the storage keys. Empty string means no prefix.
    #[serde(default)]
    pub namespace: String,
}

impl AppConfig {
    /// Builder method to point the client at another API.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.api.base_url = base_url;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "taskdeck.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse `embedded`, then apply an optional base URL override.
    ///
    /// Neither step is fatal: a bad file falls back to defaults and a bad
    /// override is ignored, each with a warning.
    pub fn resolve(embedded: &str, base_url_override: Option<&str>) -> Self {
        let mut config = Self::from_toml(embedded).unwrap_or_else(|e| {
            tracing::warn!("Invalid {}, using defaults: {}", Self::filename(), e);
            Self::default()
        });
        if let Some(raw) = base_url_override.filter(|s| !s.trim().is_empty()) {
            match Url::parse(raw.trim()) {
                Ok(url) => config.api.base_url = url,
                Err(e) => tracing::warn!("Ignoring invalid API URL override {:?}: {}", raw, e),
            }
        }
        config
    }
}
