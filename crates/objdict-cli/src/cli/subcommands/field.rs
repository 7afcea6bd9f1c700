use clap::Subcommand;

/// Field commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FieldCommands {
    /// Attach a field to a model.
    Add {
        /// Model ID.
        #[arg(long)]
        model: String,
        #[arg(long)]
        name: String,
        /// Type name, emitted verbatim.
        #[arg(long = "type")]
        type_name: String,
    },
    /// Remove a field by ID.
    Remove { id: String },
}
