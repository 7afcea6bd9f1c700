//! Storage records for all object dictionary entities.
//!
//! Each record maps to one table in the backing store. Fields are not embedded
//! in their model; they point back to it through `FieldRecord::model_id`.

mod field;
mod model;
mod user;

pub use field::FieldRecord;
pub use model::ModelRecord;
pub use user::UserRecord;
