//! Cross-cutting error types for the object dictionary.
//!
//! Store errors (`DatabaseError`) and generator errors (`CodegenError`) live in
//! their own crates. The model service never wraps them; it returns whatever
//! its collaborators raise.

use thiserror::Error;

/// Errors raised while building records or parsing identifiers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (empty names, empty type names).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A string could not be parsed as an identifier.
    #[error("Invalid id '{value}': {source}")]
    InvalidId {
        value: String,
        #[source]
        source: uuid::Error,
    },
}

/// Parse a textual identifier.
///
/// # Errors
///
/// Returns `CoreError::InvalidId` if `value` is not a UUID.
pub fn parse_id(value: &str) -> Result<uuid::Uuid, CoreError> {
    uuid::Uuid::parse_str(value.trim()).map_err(|source| CoreError::InvalidId {
        value: value.to_string(),
        source,
    })
}

pub(crate) fn require_non_empty(what: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{what} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_hyphenated_uuid() {
        let id = uuid::Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn parse_id_rejects_garbage() {
        let err = parse_id("mdl-1234").unwrap_err();
        assert!(matches!(err, CoreError::InvalidId { ref value, .. } if value == "mdl-1234"));
    }

    #[test]
    fn require_non_empty_rejects_whitespace() {
        assert!(require_non_empty("name", "  ").is_err());
        assert!(require_non_empty("name", "Invoice").is_ok());
    }
}
