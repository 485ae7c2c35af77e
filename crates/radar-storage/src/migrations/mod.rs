//! Schema migrations, tracked with `PRAGMA user_version`.

pub mod v001_preferences;

use rusqlite::Connection;

use radar_core::errors::StorageError;

use crate::connection::sqlite_err;

/// `(version, sql)` in application order. Append only.
const MIGRATIONS: &[(u32, &str)] = &[(1, v001_preferences::MIGRATION_SQL)];

/// Schema version this build writes.
pub const LATEST_VERSION: u32 = 1;

pub fn current_version(conn: &Connection) -> Result<u32, StorageError> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(sqlite_err)
}

/// Apply every migration newer than the database, each in its own
/// transaction. Returns the resulting schema version.
pub fn run_migrations(conn: &Connection) -> Result<u32, StorageError> {
    let current = current_version(conn)?;
    if current > LATEST_VERSION {
        return Err(StorageError::MigrationFailed {
            version: current,
            message: format!("database schema is newer than supported version {LATEST_VERSION}"),
        });
    }

    for &(version, sql) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        let failed = |e: rusqlite::Error| StorageError::MigrationFailed {
            version,
            message: e.to_string(),
        };
        let tx = conn.unchecked_transaction().map_err(failed)?;
        tx.execute_batch(sql).map_err(failed)?;
        tx.pragma_update(None, "user_version", version).map_err(failed)?;
        tx.commit().map_err(failed)?;
        tracing::info!(version, "applied preference schema migration");
    }
    current_version(conn)
}
