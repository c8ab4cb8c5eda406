//! v001 -- Initial schema creation.
//!
//! Creates the single `kv` table every collection is stored in.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
-- ----------------------------------------------------------------
-- Key/value entries (one row per collection)
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS kv (
    key        TEXT PRIMARY KEY NOT NULL,   -- collection key, e.g. friends_list
    value      TEXT NOT NULL,               -- JSON-encoded collection
    updated_at TEXT NOT NULL                -- ISO-8601 / RFC-3339
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
