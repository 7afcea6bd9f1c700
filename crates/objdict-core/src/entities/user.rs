use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CoreError, require_non_empty};

/// The owner of one or more models.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
}

impl UserRecord {
    /// Build a new user with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `name` is empty.
    pub fn new(name: &str, email: Option<String>) -> Result<Self, CoreError> {
        require_non_empty("user name", name)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email,
        })
    }
}
