//! SQLite-backed preference store.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, Connection, OptionalExtension};

use radar_core::errors::StorageError;
use radar_core::traits::PreferenceStore;

use crate::connection::{self, sqlite_err};

pub struct SqlitePreferenceStore {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl SqlitePreferenceStore {
    /// Open (or create) the database at `path` and migrate it.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = connection::open_database(path)?;
        tracing::debug!(path = %path.display(), "preference store opened");
        Ok(Self {
            conn: Mutex::new(conn),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            conn: Mutex::new(connection::open_in_memory()?),
            path: None,
        })
    }

    /// `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let guard = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;
        f(&guard)
    }

    /// All stored entries, ordered by key.
    pub fn entries(&self) -> Result<Vec<(String, String)>, StorageError> {
        self.with_conn(|conn| {
            let mut stmt = conn
                .prepare_cached("SELECT key, value FROM preferences ORDER BY key")
                .map_err(sqlite_err)?;
            let rows = stmt
                .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
                .map_err(sqlite_err)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(sqlite_err)
        })
    }

    /// Unix seconds of the last write to `key`.
    pub fn updated_at(&self, key: &str) -> Result<Option<i64>, StorageError> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT updated_at FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(sqlite_err)
        })
    }
}

impl PreferenceStore for SqlitePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(sqlite_err)
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO preferences (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, unix_now()],
            )
            .map_err(sqlite_err)?;
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM preferences WHERE key = ?1", params![key])
                .map_err(sqlite_err)?;
            Ok(())
        })
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
