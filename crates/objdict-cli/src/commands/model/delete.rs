use objdict_service::GenericService;
use serde::Serialize;
use uuid::Uuid;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_id;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeleteResponse {
    id: Uuid,
    deleted: bool,
}

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let id = parse_id(id, "model id")?;
    ctx.models.delete(&id)?;
    output(&DeleteResponse { id, deleted: true }, flags.format)
}
