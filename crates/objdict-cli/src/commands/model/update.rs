use chrono::Utc;
use objdict_core::entities::ModelRecord;
use objdict_core::views::ModelSummary;
use objdict_service::GenericService;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_id;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    id: &str,
    name: Option<&str>,
    description: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let id = parse_id(id, "model id")?;
    let mut model = ctx.models.get_by_id(&id)?;

    if let Some(name) = name {
        if name.trim().is_empty() {
            anyhow::bail!("model name must not be empty");
        }
        model.name = name.to_string();
    }
    if let Some(description) = description {
        model.description = Some(description.to_string());
    }
    model.updated_at = Utc::now();

    ctx.models.update(&model)?;
    output(&ModelSummary::from(ModelRecord::from(&model)), flags.format)
}
