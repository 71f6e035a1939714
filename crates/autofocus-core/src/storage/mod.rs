//! Persistence: the JSON snapshot document and TOML configuration.

mod config;
mod document;

pub use config::{BlockingPrefs, Config, NotificationsConfig};
pub use document::{Document, Settings};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/autofocus[-dev]/` based on AUTOFOCUS_ENV.
///
/// Set AUTOFOCUS_ENV=dev to use a separate development data directory.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .ok_or(StorageError::DataDirUnavailable)?
        .join(".config");

    let env = std::env::var("AUTOFOCUS_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("autofocus-dev")
    } else {
        base_dir.join("autofocus")
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::WriteFailed {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
