//! Preference storage errors.

use super::error_code::{self, RadarErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("cannot create storage directory {path}: {message}")]
    Directory { path: String, message: String },

    #[error("store lock poisoned")]
    LockPoisoned,
}

impl RadarErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            _ => error_code::STORAGE_ERROR,
        }
    }
}
