//! # objdict-service
//!
//! The model service: reads a model together with its fields and owner,
//! lists models shallowly, forwards writes to the command store, and renders
//! class definitions from aggregate views.
//!
//! The service is generic over its four collaborators (model commands, model
//! queries, field queries, user queries). They share one error type, and every
//! error they raise reaches the caller untouched.

pub mod model;
pub mod traits;

pub use model::ModelService;
pub use traits::{CodeService, GenericService};
