//! View shapes handed to callers of the model service.
//!
//! `ModelView` is the aggregate (detail) view: model core fields plus its
//! fields and embedded owner. `ModelSummary` is the shallow (list) view and has
//! nowhere to put fields or an owner, so listings can never carry them.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One field of a model as seen by callers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FieldView {
    pub id: Uuid,
    pub model_id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

/// The owner of a model as seen by callers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserView {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Fully composed model: core fields, ordered fields, embedded owner.
///
/// Built fresh on every read and never persisted in this shape; writes
/// decompose it back to a `ModelRecord` and drop `fields` and `user`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ModelView {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub fields: Vec<FieldView>,
    #[serde(default)]
    pub user: Option<UserView>,
}

/// Model listing entry without nested fields or owner.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ModelSummary {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
