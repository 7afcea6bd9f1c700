mod field;
mod model;
mod user;

pub use field::FieldCommands;
pub use model::ModelCommands;
pub use user::UserCommands;
