//! Column parsing helpers.
//!
//! Identifiers and timestamps are stored as TEXT. These helpers turn them back
//! into typed values and report bad data as `DatabaseError::InvalidState`.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DatabaseError;

/// Parse a TEXT column as `DateTime<Utc>`.
///
/// Accepts RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and the plain SQL format
/// (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` if neither format matches.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::InvalidState(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column as a UUID.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` if the text is not a UUID.
pub fn parse_uuid(s: &str) -> Result<Uuid, DatabaseError> {
    Uuid::parse_str(s)
        .map_err(|e| DatabaseError::InvalidState(format!("Failed to parse id '{s}': {e}")))
}

/// Format a timestamp for storage.
#[must_use]
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}
