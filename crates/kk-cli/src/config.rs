//! TOML configuration for the `kk` binary.
//!
//! ```toml
//! [clock]
//! genesis = "2024-05-10T06:45:41.888Z"
//! sunrise = "2024-05-11T04:30:00Z"
//! naive_input = "utc"        # or "reject"
//!
//! [server]
//! bind = "127.0.0.1:8080"
//! ```
//!
//! Every key is optional. Instants must be quoted strings.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use kk_core::ClockConfig;
use serde::{Deserialize, Serialize};

pub const CONFIG_ENV: &str = "KK_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub clock: ClockConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Resolve the config path: explicit flag > `KK_CONFIG` > none.
pub fn config_path(flag: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = flag {
        return Some(path.to_path_buf());
    }
    std::env::var(CONFIG_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

/// Load config from `path`, or canonical defaults when there is none.
pub fn load(path: Option<&Path>) -> Result<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse(&raw).with_context(|| format!("invalid config {}", path.display()))
}

pub fn parse(raw: &str) -> Result<AppConfig> {
    Ok(toml::from_str(raw)?)
}
