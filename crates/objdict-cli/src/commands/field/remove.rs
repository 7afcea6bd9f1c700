use objdict_core::CommandRepository;
use serde::Serialize;
use uuid::Uuid;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_id;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RemoveResponse {
    id: Uuid,
    removed: bool,
}

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let id = parse_id(id, "field id")?;
    ctx.fields.delete(&id)?;
    output(&RemoveResponse { id, removed: true }, flags.format)
}
