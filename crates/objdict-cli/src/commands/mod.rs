pub mod dispatch;
pub mod field;
pub mod model;
pub mod schema;
pub mod shared;
pub mod user;
