mod add;
mod remove;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FieldCommands;
use crate::context::AppContext;

/// Handle `odict field`.
pub fn handle(action: &FieldCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        FieldCommands::Add {
            model,
            name,
            type_name,
        } => add::run(model, name, type_name, ctx, flags),
        FieldCommands::Remove { id } => remove::run(id, ctx, flags),
    }
}
