//! Connection setup shared by file-backed and in-memory databases.

pub mod pragmas;

use std::path::Path;

use rusqlite::Connection;

use radar_core::errors::StorageError;

use self::pragmas::apply_pragmas;
use crate::migrations;

pub(crate) fn sqlite_err(e: rusqlite::Error) -> StorageError {
    StorageError::SqliteError {
        message: e.to_string(),
    }
}

/// Open `path`, creating its parent directory, then apply pragmas and
/// bring the schema up to date.
pub fn open_database(path: &Path) -> Result<Connection, StorageError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StorageError::Directory {
            path: parent.display().to_string(),
            message: e.to_string(),
        })?;
    }
    let conn = Connection::open(path).map_err(sqlite_err)?;
    apply_pragmas(&conn)?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

/// Open a private in-memory database (for testing).
pub fn open_in_memory() -> Result<Connection, StorageError> {
    let conn = Connection::open_in_memory().map_err(sqlite_err)?;
    apply_pragmas(&conn)?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}
