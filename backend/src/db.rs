//! SQLite access for the fleet console.
//!
//! `Db` holds the database path and hands out one connection per request.
//! Foreign keys are switched on per connection so that deleting a device
//! detaches its batteries (`ON DELETE SET NULL`) instead of leaving dangling
//! owner ids.

use std::path::{Path, PathBuf};

use rusqlite::Connection;

/// Shared application state: the path of the SQLite database file.
///
/// Kept as a path rather than a pooled connection so tests can point each
/// instance at its own temporary file.
#[derive(Debug, Clone)]
pub struct Db {
    path: PathBuf,
}

impl Db {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Db {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Opens a connection with foreign-key enforcement enabled.
    pub fn connect(&self) -> rusqlite::Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(conn)
    }

    /// Creates the schema if it does not exist yet.
    pub fn init(&self) -> rusqlite::Result<()> {
        let conn = self.connect()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS devices (
                 id   INTEGER PRIMARY KEY AUTOINCREMENT,
                 name TEXT NOT NULL UNIQUE
             );
             CREATE TABLE IF NOT EXISTS batteries (
                 id        INTEGER PRIMARY KEY AUTOINCREMENT,
                 name      TEXT NOT NULL UNIQUE,
                 device_id INTEGER REFERENCES devices(id) ON DELETE SET NULL
             );",
        )
    }
}
