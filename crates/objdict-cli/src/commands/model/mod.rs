mod class;
mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ModelCommands;
use crate::context::AppContext;

/// Handle `odict model`.
pub fn handle(action: &ModelCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ModelCommands::Create {
            name,
            user,
            description,
        } => create::run(name, user, description.as_deref(), ctx, flags),
        ModelCommands::Get { id } => get::run(id, ctx, flags),
        ModelCommands::List { filters } => list::run(filters, ctx, flags),
        ModelCommands::Update {
            id,
            name,
            description,
        } => update::run(id, name.as_deref(), description.as_deref(), ctx, flags),
        ModelCommands::Delete { id } => delete::run(id, ctx, flags),
        ModelCommands::Class { id } => class::run(id, ctx, flags),
    }
}
