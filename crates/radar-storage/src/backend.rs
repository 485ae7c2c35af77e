//! Store selection from configuration.

use std::sync::Arc;

use radar_core::config::{StorageBackend, StorageConfig};
use radar_core::errors::StorageError;
use radar_core::traits::PreferenceStore;

use crate::{MemoryPreferenceStore, SqlitePreferenceStore};

/// Open the store `config` selects. Without a usable path (no home
/// directory and none configured) preferences are kept in memory.
pub fn open_store(config: &StorageConfig) -> Result<Arc<dyn PreferenceStore>, StorageError> {
    match config.effective_backend() {
        StorageBackend::Memory => Ok(Arc::new(MemoryPreferenceStore::new())),
        StorageBackend::Sqlite => match config.effective_path() {
            Some(path) => Ok(Arc::new(SqlitePreferenceStore::open(&path)?)),
            None => {
                tracing::warn!("no preference path available, preferences will not persist");
                Ok(Arc::new(MemoryPreferenceStore::new()))
            }
        },
    }
}
