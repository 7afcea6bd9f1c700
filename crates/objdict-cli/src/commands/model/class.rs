use objdict_service::{CodeService, GenericService};
use serde::Serialize;
use uuid::Uuid;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_id;
use crate::context::AppContext;
use crate::output::output_text;

#[derive(Debug, Serialize)]
struct ClassResponse<'a> {
    model_id: Uuid,
    name: &'a str,
    class_definition: &'a str,
}

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let model = ctx.models.get_by_id(&parse_id(id, "model id")?)?;

    let text = if ctx.config.codegen.strict {
        ctx.models.try_class_definition(&model)?
    } else {
        ctx.models.get_class_definition(&model)
    };

    let response = ClassResponse {
        model_id: model.id,
        name: &model.name,
        class_definition: &text,
    };
    output_text(&text, &response, flags.format)
}
