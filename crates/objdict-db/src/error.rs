//! Database error types for objdict-db.

use objdict_core::enums::EntityKind;
use thiserror::Error;

/// Errors from record store operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// No row with the requested id.
    #[error("Entity not found: {entity} {id}")]
    NotFound { entity: EntityKind, id: String },

    /// A filter named a column the table does not have.
    #[error("Unknown column '{column}' for table '{table}'")]
    UnknownColumn { table: &'static str, column: String },

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying `DuckDB` error.
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    /// I/O error while preparing the database file location.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
