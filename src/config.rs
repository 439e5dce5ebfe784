//! Server configuration
//!
//! Values come from an optional TOML file and are then overridden by CLI
//! flags (which themselves fall back to `SDKGEN_*` environment variables).
//!
//! ```toml
//! host = "127.0.0.1"
//! port = 9000
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Default port the HTTP shell listens on
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// HTTP shell settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Parse a config from TOML text
    pub fn from_toml(content: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    /// Load the config file at `path`, or the defaults when there is none
    pub async fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let origin = path.display().to_string();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: origin.clone(),
                source,
            })?;

        Self::from_toml(&content, &origin)
    }

    /// Apply explicit overrides on top of the loaded values
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// `host:port` to bind to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
