//! Generic record store over one table.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use duckdb::params_from_iter;
use duckdb::types::Value;
use objdict_core::{CommandRepository, Conditions, QueryRepository};
use uuid::Uuid;

use crate::ObjDictDb;
use crate::error::DatabaseError;
use crate::record::Record;

/// Command and query store for records of type `T`.
///
/// Cheap to clone; every clone shares the same database handle.
pub struct Repository<T> {
    db: Arc<ObjDictDb>,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            _record: PhantomData,
        }
    }
}

impl<T: Record> fmt::Debug for Repository<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository").field("table", &T::TABLE).finish()
    }
}

impl<T: Record> Repository<T> {
    #[must_use]
    pub const fn new(db: Arc<ObjDictDb>) -> Self {
        Self {
            db,
            _record: PhantomData,
        }
    }

    fn select_list() -> String {
        T::COLUMNS.join(", ")
    }

    /// `WHERE` clause and parameters for `conditions`, keys checked against
    /// the table's columns.
    fn where_clause(conditions: &Conditions) -> Result<(String, Vec<Value>), DatabaseError> {
        if conditions.is_empty() {
            return Ok((String::new(), Vec::new()));
        }
        let mut predicates = Vec::with_capacity(conditions.len());
        let mut values = Vec::with_capacity(conditions.len());
        for (key, value) in conditions.iter() {
            let column = T::COLUMNS
                .iter()
                .find(|c| **c == key)
                .ok_or_else(|| DatabaseError::UnknownColumn {
                    table: T::TABLE,
                    column: key.to_string(),
                })?;
            predicates.push(format!("{column} = ?"));
            values.push(Value::Text(value.to_string()));
        }
        Ok((format!(" WHERE {}", predicates.join(" AND ")), values))
    }

    fn query(&self, sql: &str, values: Vec<Value>) -> Result<Vec<T>, DatabaseError> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(sql)?;
        let mut rows = stmt.query(params_from_iter(values))?;
        let mut results = Vec::new();
        while let Some(row) = rows.next()? {
            results.push(T::from_row(row)?);
        }
        Ok(results)
    }

    fn execute(&self, sql: &str, values: Vec<Value>) -> Result<usize, DatabaseError> {
        let conn = self.db.conn();
        Ok(conn.execute(sql, params_from_iter(values))?)
    }
}

impl<T: Record> QueryRepository<T> for Repository<T> {
    type Error = DatabaseError;

    fn get_by_id(&self, id: &Uuid) -> Result<T, DatabaseError> {
        let sql = format!("SELECT {} FROM {} WHERE id = ?", Self::select_list(), T::TABLE);
        self.query(&sql, vec![Value::Text(id.to_string())])?
            .into_iter()
            .next()
            .ok_or_else(|| DatabaseError::NotFound {
                entity: T::KIND,
                id: id.to_string(),
            })
    }

    fn get_all(&self, conditions: &Conditions) -> Result<Vec<T>, DatabaseError> {
        let (filter, values) = Self::where_clause(conditions)?;
        let sql = format!(
            "SELECT {} FROM {}{filter} ORDER BY ordinal",
            Self::select_list(),
            T::TABLE
        );
        let results = self.query(&sql, values)?;
        tracing::debug!(table = T::TABLE, %conditions, rows = results.len(), "get_all");
        Ok(results)
    }
}

impl<T: Record> CommandRepository<T> for Repository<T> {
    type Error = DatabaseError;

    fn create(&self, record: &T) -> Result<(), DatabaseError> {
        let placeholders = vec!["?"; T::COLUMNS.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({placeholders})",
            T::TABLE,
            Self::select_list()
        );
        self.execute(&sql, record.to_values())?;
        tracing::debug!(table = T::TABLE, id = %record.id(), "created");
        Ok(())
    }

    /// Overwrites every non-id column. Updating a missing id changes nothing.
    fn update(&self, record: &T) -> Result<(), DatabaseError> {
        let assignments = T::COLUMNS[1..]
            .iter()
            .map(|c| format!("{c} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE {} SET {assignments} WHERE id = ?", T::TABLE);

        let mut values = record.to_values();
        let id = values.remove(0);
        values.push(id);

        let changed = self.execute(&sql, values)?;
        tracing::debug!(table = T::TABLE, id = %record.id(), changed, "updated");
        Ok(())
    }

    /// Deleting a missing id changes nothing.
    fn delete(&self, id: &Uuid) -> Result<(), DatabaseError> {
        let sql = format!("DELETE FROM {} WHERE id = ?", T::TABLE);
        let changed = self.execute(&sql, vec![Value::Text(id.to_string())])?;
        tracing::debug!(table = T::TABLE, %id, changed, "deleted");
        Ok(())
    }
}
