//! Store contracts consumed by the model service.
//!
//! The service is written against these traits only. Every error a store
//! raises is handed back to the caller exactly as the store produced it, so
//! the error type is an associated type rather than a fixed enum.

use std::sync::Arc;

use uuid::Uuid;

use crate::conditions::Conditions;

/// Read side of a record store.
pub trait QueryRepository<T> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch one record. A missing id is an error, never `Ok` with a default.
    fn get_by_id(&self, id: &Uuid) -> Result<T, Self::Error>;

    /// Fetch every record matching all of `conditions`. An empty filter
    /// matches everything.
    fn get_all(&self, conditions: &Conditions) -> Result<Vec<T>, Self::Error>;
}

/// Write side of a record store. Each call is one independent write.
pub trait CommandRepository<T> {
    type Error: std::error::Error + Send + Sync + 'static;

    fn create(&self, record: &T) -> Result<(), Self::Error>;

    fn update(&self, record: &T) -> Result<(), Self::Error>;

    fn delete(&self, id: &Uuid) -> Result<(), Self::Error>;
}

impl<T, R: QueryRepository<T> + ?Sized> QueryRepository<T> for &R {
    type Error = R::Error;

    fn get_by_id(&self, id: &Uuid) -> Result<T, Self::Error> {
        (**self).get_by_id(id)
    }

    fn get_all(&self, conditions: &Conditions) -> Result<Vec<T>, Self::Error> {
        (**self).get_all(conditions)
    }
}

impl<T, R: QueryRepository<T> + ?Sized> QueryRepository<T> for Arc<R> {
    type Error = R::Error;

    fn get_by_id(&self, id: &Uuid) -> Result<T, Self::Error> {
        (**self).get_by_id(id)
    }

    fn get_all(&self, conditions: &Conditions) -> Result<Vec<T>, Self::Error> {
        (**self).get_all(conditions)
    }
}

impl<T, R: CommandRepository<T> + ?Sized> CommandRepository<T> for &R {
    type Error = R::Error;

    fn create(&self, record: &T) -> Result<(), Self::Error> {
        (**self).create(record)
    }

    fn update(&self, record: &T) -> Result<(), Self::Error> {
        (**self).update(record)
    }

    fn delete(&self, id: &Uuid) -> Result<(), Self::Error> {
        (**self).delete(id)
    }
}

impl<T, R: CommandRepository<T> + ?Sized> CommandRepository<T> for Arc<R> {
    type Error = R::Error;

    fn create(&self, record: &T) -> Result<(), Self::Error> {
        (**self).create(record)
    }

    fn update(&self, record: &T) -> Result<(), Self::Error> {
        (**self).update(record)
    }

    fn delete(&self, id: &Uuid) -> Result<(), Self::Error> {
        (**self).delete(id)
    }
}
