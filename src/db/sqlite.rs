//! SQLite database handle shared across request handlers.
//!
//! Each repository call checks a connection out of the pool and returns
//! it on drop, so a request never holds store resources past its own
//! round-trip.

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;

use super::error::StoreError;

pub type DbConn = PooledConnection<SqliteConnectionManager>;

pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Open (or create) the database file at `path`.
    pub fn new(path: &str) -> Result<Self, StoreError> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).ok();
            }
        }

        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::new(manager)?;

        Ok(Self { pool })
    }

    /// Create the `notes` table. Runs once at startup, before the server
    /// starts accepting requests.
    ///
    /// AUTOINCREMENT keeps ids monotonic: an id freed by a delete is
    /// never handed out again.
    pub fn init_schema(&self) -> Result<(), StoreError> {
        let conn = self.conn()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS notes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                category TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    pub(crate) fn conn(&self) -> Result<DbConn, StoreError> {
        Ok(self.pool.get()?)
    }
}
