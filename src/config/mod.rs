// ABOUTME: Application configuration loaded from ~/.macromind/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Event-loop tick interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Default tracing filter when RUST_LOG is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// App data directory, `~/.macromind`.
    pub fn data_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".macromind"))
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::data_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load the config file if present, defaults otherwise. A malformed file
    /// is an error rather than silently ignored.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config at {}", path.display()))
    }
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_log_filter() -> String {
    "macromind=info".to_string()
}
