use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CoreError, require_non_empty};

/// A named entity definition owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ModelRecord {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ModelRecord {
    /// Build a new record with a fresh id and both timestamps set to now.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `name` is empty.
    pub fn new(name: &str, user_id: Uuid, description: Option<String>) -> Result<Self, CoreError> {
        require_non_empty("model name", name)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description,
            user_id,
            created_at: now,
            updated_at: now,
        })
    }
}
