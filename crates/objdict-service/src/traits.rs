//! Service-level contracts.

use objdict_core::Conditions;
use uuid::Uuid;

/// Read/list/write operations over one kind of view.
///
/// `get_by_id` returns the detail view `V`; `get_all` returns the lighter
/// `Summary` shape, which is not a list of detail views.
pub trait GenericService<V> {
    type Summary;
    type Error: std::error::Error + Send + Sync + 'static;

    fn get_by_id(&self, id: &Uuid) -> Result<V, Self::Error>;

    fn get_all(&self, conditions: &Conditions) -> Result<Vec<Self::Summary>, Self::Error>;

    fn create(&self, view: &V) -> Result<(), Self::Error>;

    fn update(&self, view: &V) -> Result<(), Self::Error>;

    fn delete(&self, id: &Uuid) -> Result<(), Self::Error>;
}

/// Source text generation from a view.
pub trait CodeService<V> {
    fn get_class_definition(&self, view: &V) -> String;
}
