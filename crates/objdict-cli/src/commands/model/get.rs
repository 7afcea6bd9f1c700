use objdict_service::GenericService;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_id;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let model = ctx.models.get_by_id(&parse_id(id, "model id")?)?;
    output(&model, flags.format)
}
