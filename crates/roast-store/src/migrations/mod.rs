//! Schema upgrades for [`SqliteBackend`] files.
//!
//! `PRAGMA user_version` records the last step applied.  Opening a file runs
//! every step above that number, in order, each inside its own transaction;
//! a file written by a newer build is refused rather than guessed at.
//!
//! [`SqliteBackend`]: crate::database::SqliteBackend

pub mod v001_initial;

use rusqlite::Connection;

use crate::error::{Result, StoreError};

struct Step {
    version: u32,
    name: &'static str,
    up: fn(&Connection) -> rusqlite::Result<()>,
}

const STEPS: &[Step] = &[Step {
    version: 1,
    name: "v001_initial",
    up: v001_initial::up,
}];

/// Schema version a freshly opened file ends up at.
pub const CURRENT_VERSION: u32 = 1;

/// Bring the `kv` schema of `conn` up to [`CURRENT_VERSION`].
pub fn run_migrations(conn: &Connection) -> Result<()> {
    let found: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    if found > CURRENT_VERSION {
        return Err(StoreError::Migration(format!(
            "database schema v{found} is newer than supported v{CURRENT_VERSION}"
        )));
    }

    for step in STEPS.iter().filter(|step| step.version > found) {
        tracing::info!(version = step.version, step = step.name, "upgrading kv schema");
        conn.execute_batch("BEGIN")?;
        let applied = (step.up)(conn)
            .and_then(|()| conn.pragma_update(None, "user_version", step.version));
        match applied {
            Ok(()) => conn.execute_batch("COMMIT")?,
            Err(e) => {
                let _ = conn.execute_batch("ROLLBACK");
                return Err(StoreError::Migration(format!("{}: {e}", step.name)));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(conn: &Connection) -> u32 {
        conn.pragma_query_value(None, "user_version", |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn upgrade_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();
        assert_eq!(version(&conn), CURRENT_VERSION);

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'kv'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 1);
    }

    #[test]
    fn steps_are_ordered_and_end_at_current() {
        assert!(STEPS.windows(2).all(|w| w[0].version < w[1].version));
        assert_eq!(STEPS.last().map(|s| s.version), Some(CURRENT_VERSION));
    }

    #[test]
    fn newer_schema_is_refused() {
        let conn = Connection::open_in_memory().unwrap();
        conn.pragma_update(None, "user_version", CURRENT_VERSION + 1)
            .unwrap();
        assert!(matches!(
            run_migrations(&conn),
            Err(StoreError::Migration(_))
        ));
    }
}
