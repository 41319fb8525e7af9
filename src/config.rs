//! Configuration loading and management.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Client configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server endpoint.
    #[serde(default)]
    pub server: ServerConfig,
    /// Defaults applied to lookup commands.
    #[serde(default)]
    pub lookup: LookupConfig,
}

/// Server endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host name of the DICT server.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number, the RFC 2229 default when omitted.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Lookup command defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupConfig {
    /// Database name, the any-database sentinel when omitted.
    #[serde(default = "default_database")]
    pub database: String,
    /// Matching strategy, the server default sentinel when omitted.
    #[serde(default = "default_strategy")]
    pub strategy: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            strategy: default_strategy(),
        }
    }
}

fn default_host() -> String {
    "dict.org".to_string()
}

fn default_port() -> u16 {
    dict_proto::DEFAULT_PORT
}

fn default_database() -> String {
    "*".to_string()
}

fn default_strategy() -> String {
    ".".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
