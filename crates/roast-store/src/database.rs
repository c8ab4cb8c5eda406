//! SQLite-backed key-value storage.
//!
//! The [`SqliteBackend`] struct owns a [`rusqlite::Connection`] and guarantees
//! that migrations are run before any other operation.  Each collection is one
//! row of the `kv` table.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use directories::ProjectDirs;
use rusqlite::{params, Connection, OptionalExtension};

use crate::backend::KvBackend;
use crate::error::{Result, StoreError};
use crate::migrations;

/// Wrapper around a [`rusqlite::Connection`].
pub struct SqliteBackend {
    conn: Mutex<Connection>,
}

impl SqliteBackend {
    /// Open (or create) the default application database.
    ///
    /// The database file is placed in the platform-appropriate data directory:
    /// - Linux:   `~/.local/share/roast-arena/roast-arena.db`
    /// - macOS:   `~/Library/Application Support/com.roastarena.roast-arena/roast-arena.db`
    /// - Windows: `{FOLDERID_RoamingAppData}\roastarena\roast-arena\data\roast-arena.db`
    pub fn open_default() -> Result<Self> {
        Self::open_at(&Self::default_path()?)
    }

    /// Location used by [`SqliteBackend::open_default`].
    pub fn default_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "roastarena", "roast-arena")
            .ok_or(StoreError::NoDataDir)?;
        Ok(project_dirs.data_dir().join("roast-arena.db"))
    }

    /// Open (or create) a database at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        tracing::info!(path = %path.display(), "opening database");

        let conn = Connection::open(path)?;
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |_| Ok(()))?;

        Self::init(conn)
    }

    /// Open a private, non-persistent database.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the filesystem path of the open database (if any).
    pub fn path(&self) -> Option<PathBuf> {
        self.conn()
            .path()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    }
}

impl KvBackend for SqliteBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn()
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn().execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.conn()
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("test.db");

        let db = SqliteBackend::open_at(&path).expect("should open");
        assert!(db.path().is_some());
        assert!(path.exists());
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");

        {
            let db = SqliteBackend::open_at(&path).unwrap();
            db.set("friends_list", "[]").unwrap();
            db.set("friends_list", "[{\"name\":\"Ana\"}]").unwrap();
        }

        let db = SqliteBackend::open_at(&path).unwrap();
        assert_eq!(
            db.get("friends_list").unwrap().as_deref(),
            Some("[{\"name\":\"Ana\"}]")
        );
    }

    #[test]
    fn remove_missing_key_is_fine() {
        let db = SqliteBackend::open_in_memory().unwrap();
        assert!(db.path().is_none());
        db.remove("roast_leaderboard").unwrap();
        db.set("roast_leaderboard", "{}").unwrap();
        db.remove("roast_leaderboard").unwrap();
        assert_eq!(db.get("roast_leaderboard").unwrap(), None);
    }
}
