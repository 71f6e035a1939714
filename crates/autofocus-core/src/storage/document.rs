//! The persisted JSON snapshot document.
//!
//! One JSON object holds everything the tool knows: enable state, site
//! lists, schedule, presentation settings, stats, and progression. Field
//! names are camelCase, matching the document schema this tool inherited.
//!
//! Callers must serialize read-modify-write cycles themselves: `load` and
//! `save` move whole snapshots, so two concurrent cycles can lose one
//! side's update. Single-process CLI use is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::blocking::{BlockingMode, SiteList};
use crate::error::StorageError;
use crate::gamification::GamificationState;
use crate::schedule::Schedule;
use crate::stats::StatsSnapshot;

const DOCUMENT_FILE: &str = "document.json";

/// Presentation and notification settings stored alongside the state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub blocking_mode: BlockingMode,
    pub notify_blocked: bool,
    pub notify_session: bool,
    pub notify_stats: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            blocking_mode: BlockingMode::Standard,
            notify_blocked: true,
            notify_session: false,
            notify_stats: false,
        }
    }
}

/// The full persisted state snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    /// Master switch; false disables all blocking.
    pub enabled: bool,
    pub blocked_sites: SiteList,
    pub whitelist: SiteList,
    pub schedule_settings: Schedule,
    pub settings: Settings,
    pub stats: StatsSnapshot,
    pub gamification: GamificationState,
}

impl Default for Document {
    fn default() -> Self {
        // First-run seed data.
        Self {
            enabled: true,
            blocked_sites: [
                "youtube.com",
                "twitter.com",
                "reddit.com",
                "facebook.com",
                "instagram.com",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
            whitelist: ["google.com", "gmail.com", "docs.google.com", "drive.google.com"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            schedule_settings: Schedule::default(),
            settings: Settings::default(),
            stats: StatsSnapshot::default(),
            gamification: GamificationState::default(),
        }
    }
}

impl Document {
    /// Path of the document file inside the data directory.
    pub fn path() -> Result<PathBuf, StorageError> {
        Ok(data_dir()?.join(DOCUMENT_FILE))
    }

    /// Load the document, seeding defaults when the file does not exist.
    /// A file that exists but fails to parse is a hard error, never a
    /// silently replaced document.
    pub fn load() -> Result<Self, StorageError> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, StorageError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
                    path: path.to_path_buf(),
                    source,
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(StorageError::ReadFailed {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Persist the document via write-to-temp-then-rename, so a crash
    /// mid-write never leaves a truncated document behind.
    pub fn save(&self) -> Result<(), StorageError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), StorageError> {
        let write_err = |source| StorageError::WriteFailed {
            path: path.to_path_buf(),
            source,
        };

        let content = serde_json::to_string_pretty(self).map_err(|e| StorageError::WriteFailed {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })?;

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, content).map_err(write_err)?;
        std::fs::rename(&tmp, path).map_err(write_err)
    }
}
