use clap::{Args, Subcommand};

use crate::cli::subcommands::{FieldCommands, ModelCommands, UserCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Models: aggregate reads, listing, writes and class generation.
    Model {
        #[command(subcommand)]
        action: ModelCommands,
    },
    /// Fields attached to models.
    Field {
        #[command(subcommand)]
        action: FieldCommands,
    },
    /// Users owning models.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Print the JSON schema of a view type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// One of: model, model-summary, field, user
    pub type_name: String,
}
