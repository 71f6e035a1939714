//! TOML-based application configuration.
//!
//! Stores tool-level preferences:
//! - Notification toggles
//! - The blocking mode used when seeding a fresh document
//!
//! Configuration is stored at `~/.config/autofocus/config.toml`. The
//! per-profile blocking state itself (site lists, schedule, stats) lives in
//! the JSON snapshot document, not here.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::blocking::BlockingMode;
use crate::error::ConfigError;

/// Notification preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Notify when a site is blocked.
    #[serde(default = "default_true")]
    pub on_block: bool,
    /// Notify when a focus session completes.
    #[serde(default)]
    pub on_session_complete: bool,
    /// Weekly stats summary.
    #[serde(default)]
    pub weekly_summary: bool,
}

/// Blocking preferences applied when seeding a new document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockingPrefs {
    #[serde(default)]
    pub default_mode: BlockingMode,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/autofocus/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub blocking: BlockingPrefs,
}

fn default_true() -> bool {
    true
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            on_block: true,
            on_session_complete: false,
            weekly_summary: false,
        }
    }
}

impl Default for BlockingPrefs {
    fn default() -> Self {
        Self {
            default_mode: BlockingMode::Standard,
        }
    }
}

impl Config {
    /// Path of the config file inside the data directory.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/autofocus"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk or return default (writing the default back so the
    /// file exists for editing).
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }
}
