use clap::Subcommand;

/// Model commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ModelCommands {
    /// Create a model owned by a user.
    Create {
        #[arg(long)]
        name: String,
        /// Owning user ID.
        #[arg(long)]
        user: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Get a model with its fields and owner.
    Get { id: String },
    /// List models without fields or owner.
    List {
        /// Equality filter as `column=value`, repeatable.
        #[arg(long = "where", value_name = "COLUMN=VALUE")]
        filters: Vec<String>,
    },
    /// Rename a model or change its description.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a model. Its fields are left in place.
    Delete { id: String },
    /// Print the generated class definition.
    Class { id: String },
}
