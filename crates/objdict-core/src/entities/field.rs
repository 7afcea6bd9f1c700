use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CoreError, require_non_empty};

/// One typed attribute of a model.
///
/// `name` and `type_name` are opaque strings: nothing here checks that they
/// are legal identifiers or resolvable types in any target language.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FieldRecord {
    pub id: Uuid,
    pub model_id: Uuid,
    pub name: String,
    pub type_name: String,
}

impl FieldRecord {
    /// Build a new field attached to `model_id`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `name` or `type_name` is empty.
    pub fn new(model_id: Uuid, name: &str, type_name: &str) -> Result<Self, CoreError> {
        require_non_empty("field name", name)?;
        require_non_empty("field type", type_name)?;
        Ok(Self {
            id: Uuid::new_v4(),
            model_id,
            name: name.to_string(),
            type_name: type_name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_strings_verbatim() {
        let model_id = Uuid::new_v4();
        let field = FieldRecord::new(model_id, "Amount", "decimal?").unwrap();
        assert_eq!(field.model_id, model_id);
        assert_eq!(field.name, "Amount");
        assert_eq!(field.type_name, "decimal?");
    }

    #[test]
    fn new_rejects_empty_type() {
        assert!(FieldRecord::new(Uuid::new_v4(), "Amount", "").is_err());
    }
}
