//! SQLite-based storage implementation for the duplex core.
//!
//! This module provides a SQLite-based storage backend implementing the
//! `DuplexStorageProvider` trait, allowing it to be used as a persistent
//! storage backend.
//!
//! SQLite-based storage is persistent and will be saved to a file. It's
//! useful for production applications where data persistence is required.
//!
//! A single connection behind a mutex serves all conversation, message and
//! profile state, so every read is a consistent snapshot and the
//! conversation uniqueness constraint is the only concurrency guard the
//! resolver needs.
//!
//! # Example
//!
//! ```no_run
//! use duplex_sqlite_storage::DuplexSqliteStorage;
//!
//! let storage = DuplexSqliteStorage::new("/path/to/duplex.sqlite3")?;
//! # Ok::<(), duplex_sqlite_storage::error::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::bare_urls)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use duplex_storage_traits::{Backend, DuplexStorageProvider};
use rusqlite::Connection;

mod conversations;
mod db;
pub mod error;
mod messages;
mod migrations;
mod profiles;

use self::error::Error;

/// A SQLite-based storage implementation for the duplex core.
///
/// Cloning is cheap: clones share the same underlying connection.
#[derive(Debug, Clone)]
pub struct DuplexSqliteStorage {
    conn: Arc<Mutex<Connection>>,
}

impl DuplexSqliteStorage {
    /// Open (creating if necessary) a database at `path` and run migrations.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, Error> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Open a private in-memory database (tests, ephemeral runs).
    pub fn new_in_memory() -> Result<Self, Error> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(mut conn: Connection) -> Result<Self, Error> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        migrations::run_migrations(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run `f` with exclusive access to the underlying connection.
    pub(crate) fn with_connection<T, E>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, E>,
    ) -> Result<T, E> {
        let guard = match self.conn.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&guard)
    }
}

impl DuplexStorageProvider for DuplexSqliteStorage {
    fn backend(&self) -> Backend {
        Backend::SQLite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_is_sqlite() {
        let storage = DuplexSqliteStorage::new_in_memory().unwrap();
        assert_eq!(storage.backend(), Backend::SQLite);
        assert!(storage.backend().is_persistent());
    }

    #[test]
    fn test_reopening_a_database_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("duplex.sqlite3");

        // Migrations must be a no-op the second time around.
        drop(DuplexSqliteStorage::new(&path).unwrap());
        DuplexSqliteStorage::new(&path).unwrap();
    }
}
