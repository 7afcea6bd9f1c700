//! Record ↔ view translation.
//!
//! One pair of `From` conversions per entity, plus [`translate_all`] to lift
//! any of them over a sequence. Translation is total: it never fails and never
//! looks at data beyond the fields it copies.

use crate::entities::{FieldRecord, ModelRecord, UserRecord};
use crate::views::{FieldView, ModelSummary, ModelView, UserView};

/// Translate every item of a sequence with its `From` conversion, keeping order.
pub fn translate_all<S, T, I>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = S>,
    T: From<S>,
{
    items.into_iter().map(T::from).collect()
}

impl From<ModelRecord> for ModelView {
    fn from(record: ModelRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            user_id: record.user_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
            fields: Vec::new(),
            user: None,
        }
    }
}

impl From<ModelRecord> for ModelSummary {
    fn from(record: ModelRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            user_id: record.user_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

impl From<&ModelView> for ModelRecord {
    fn from(view: &ModelView) -> Self {
        Self {
            id: view.id,
            name: view.name.clone(),
            description: view.description.clone(),
            user_id: view.user_id,
            created_at: view.created_at,
            updated_at: view.updated_at,
        }
    }
}

impl From<FieldRecord> for FieldView {
    fn from(record: FieldRecord) -> Self {
        Self {
            id: record.id,
            model_id: record.model_id,
            name: record.name,
            type_name: record.type_name,
        }
    }
}

impl From<&FieldView> for FieldRecord {
    fn from(view: &FieldView) -> Self {
        Self {
            id: view.id,
            model_id: view.model_id,
            name: view.name.clone(),
            type_name: view.type_name.clone(),
        }
    }
}

impl From<UserRecord> for UserView {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
        }
    }
}

impl From<&UserView> for UserRecord {
    fn from(view: &UserView) -> Self {
        Self {
            id: view.id,
            name: view.name.clone(),
            email: view.email.clone(),
        }
    }
}
