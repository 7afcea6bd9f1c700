use objdict_service::GenericService;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_conditions;
use crate::context::AppContext;
use crate::output::output;

pub fn run(filters: &[String], ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let conditions = parse_conditions(filters)?;
    let models = ctx.models.get_all(&conditions)?;
    output(&models, flags.format)
}
