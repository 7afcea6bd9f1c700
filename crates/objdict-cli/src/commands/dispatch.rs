use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Model { action } => commands::model::handle(&action, ctx, flags),
        Commands::Field { action } => commands::field::handle(&action, ctx, flags),
        Commands::User { action } => commands::user::handle(&action, ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
