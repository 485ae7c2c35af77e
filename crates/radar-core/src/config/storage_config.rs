//! Preference storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PREFERENCES_FILE;

/// Where preferences live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// SQLite file, persisted across runs.
    Sqlite,
    /// Process memory, gone on exit.
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Preference database path. Default: `~/.risk-radar/preferences.db`.
    pub path: Option<String>,
    /// "sqlite" or "memory". Default: "sqlite".
    pub backend: Option<String>,
}

impl StorageConfig {
    /// Returns the backend, defaulting to SQLite. Validation rejects
    /// unknown names before this is reached.
    pub fn effective_backend(&self) -> StorageBackend {
        match self.backend.as_deref() {
            Some("memory") => StorageBackend::Memory,
            _ => StorageBackend::Sqlite,
        }
    }

    /// Returns the database path. `None` only when no path is configured
    /// and no home directory can be found.
    pub fn effective_path(&self) -> Option<PathBuf> {
        match &self.path {
            Some(p) => Some(PathBuf::from(p)),
            None => super::radar_config::user_dir().map(|d| d.join(DEFAULT_PREFERENCES_FILE)),
        }
    }
}
