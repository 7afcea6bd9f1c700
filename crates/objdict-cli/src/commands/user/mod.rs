mod add;
mod get;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;

/// Handle `odict user`.
pub fn handle(action: &UserCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        UserCommands::Add { name, email } => add::run(name, email.as_deref(), ctx, flags),
        UserCommands::Get { id } => get::run(id, ctx, flags),
    }
}
