//! # objdict-db
//!
//! `DuckDB` storage for object dictionary records.
//!
//! One database file holds the `models`, `fields` and `users` tables. A
//! [`Repository`] over any [`Record`] type implements both store contracts
//! from `objdict-core`, so the model service can be wired to independent
//! command and query handles that share the same database.
//!
//! Each statement takes the connection lock for its own duration only.
//! Nothing here groups several statements into one transaction.

pub mod error;
pub mod helpers;
mod migrations;
pub mod record;
pub mod repository;

#[cfg(test)]
mod test_support;

use std::path::Path;
use std::sync::Arc;

use duckdb::Connection;
use parking_lot::{Mutex, MutexGuard};

pub use error::DatabaseError;
pub use record::Record;
pub use repository::Repository;

/// Central database handle for all object dictionary records.
pub struct ObjDictDb {
    conn: Mutex<Connection>,
}

impl ObjDictDb {
    /// Open or create a database file at `path`, creating parent
    /// directories as needed.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the file cannot be opened or migrations fail.
    pub fn open_local(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        tracing::debug!(path = %path.display(), "opening object dictionary database");
        Self::init(Connection::open(path)?)
    }

    /// Open an in-memory database (for testing).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if migrations fail.
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, DatabaseError> {
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.run_migrations()?;
        Ok(db)
    }

    /// Lock the underlying connection for direct queries.
    ///
    /// Prefer [`Repository`] for record access. Holding the guard blocks every
    /// other store handle on this database.
    pub fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock()
    }

    /// A store handle for records of type `T`.
    #[must_use]
    pub fn repository<T: Record>(self: &Arc<Self>) -> Repository<T> {
        Repository::new(Arc::clone(self))
    }
}
