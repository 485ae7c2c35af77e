//! PRAGMA configuration applied to every preference connection.
//!
//! WAL mode, NORMAL sync, 5s busy_timeout. The database holds a handful of
//! rows, so no cache or mmap tuning.

use rusqlite::Connection;

use radar_core::errors::StorageError;

use super::sqlite_err;

pub fn apply_pragmas(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        ",
    )
    .map_err(sqlite_err)
}

/// Current journal mode, lowercased (`wal`, `memory`, ...).
pub fn journal_mode(conn: &Connection) -> Result<String, StorageError> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(sqlite_err)?;
    Ok(mode.to_ascii_lowercase())
}
