//! Table mapping for every stored record type.

use duckdb::types::Value;
use objdict_core::entities::{FieldRecord, ModelRecord, UserRecord};
use objdict_core::enums::EntityKind;
use uuid::Uuid;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, parse_datetime, parse_uuid};

/// A record type with a table of its own.
///
/// `COLUMNS` lists the columns in select/insert order and starts with `id`.
/// It is also the whitelist for filter keys.
pub trait Record: Sized {
    const KIND: EntityKind;
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> Uuid;

    /// Column values in `COLUMNS` order.
    fn to_values(&self) -> Vec<Value>;

    /// Build a record from a row selected with `COLUMNS`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a column is missing or holds bad data.
    fn from_row(row: &duckdb::Row<'_>) -> Result<Self, DatabaseError>;
}

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn opt_text(s: Option<&str>) -> Value {
    s.map_or(Value::Null, text)
}

impl Record for ModelRecord {
    const KIND: EntityKind = EntityKind::Model;
    const TABLE: &'static str = "models";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "description",
        "user_id",
        "created_at",
        "updated_at",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            text(&self.id.to_string()),
            text(&self.name),
            opt_text(self.description.as_deref()),
            text(&self.user_id.to_string()),
            text(&format_datetime(&self.created_at)),
            text(&format_datetime(&self.updated_at)),
        ]
    }

    fn from_row(row: &duckdb::Row<'_>) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: parse_uuid(&row.get::<_, String>(0)?)?,
            name: row.get(1)?,
            description: row.get(2)?,
            user_id: parse_uuid(&row.get::<_, String>(3)?)?,
            created_at: parse_datetime(&row.get::<_, String>(4)?)?,
            updated_at: parse_datetime(&row.get::<_, String>(5)?)?,
        })
    }
}

impl Record for FieldRecord {
    const KIND: EntityKind = EntityKind::Field;
    const TABLE: &'static str = "fields";
    const COLUMNS: &'static [&'static str] = &["id", "model_id", "name", "type_name"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            text(&self.id.to_string()),
            text(&self.model_id.to_string()),
            text(&self.name),
            text(&self.type_name),
        ]
    }

    fn from_row(row: &duckdb::Row<'_>) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: parse_uuid(&row.get::<_, String>(0)?)?,
            model_id: parse_uuid(&row.get::<_, String>(1)?)?,
            name: row.get(2)?,
            type_name: row.get(3)?,
        })
    }
}

impl Record for UserRecord {
    const KIND: EntityKind = EntityKind::User;
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["id", "name", "email"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            text(&self.id.to_string()),
            text(&self.name),
            opt_text(self.email.as_deref()),
        ]
    }

    fn from_row(row: &duckdb::Row<'_>) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: parse_uuid(&row.get::<_, String>(0)?)?,
            name: row.get(1)?,
            email: row.get(2)?,
        })
    }
}
