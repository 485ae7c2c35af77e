//! V001: preferences key-value table.

pub const MIGRATION_SQL: &str = r#"
-- One row per preference key. Writes upsert, so the last write wins.
CREATE TABLE IF NOT EXISTS preferences (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL
) STRICT;
"#;
