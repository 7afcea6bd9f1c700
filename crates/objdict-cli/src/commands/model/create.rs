use objdict_core::entities::ModelRecord;
use objdict_core::views::{ModelSummary, ModelView};
use objdict_service::GenericService;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_id;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    name: &str,
    user: &str,
    description: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user_id = parse_id(user, "user id")?;
    let record = ModelRecord::new(name, user_id, description.map(str::to_string))?;
    ctx.models.create(&ModelView::from(record.clone()))?;
    output(&ModelSummary::from(record), flags.format)
}
