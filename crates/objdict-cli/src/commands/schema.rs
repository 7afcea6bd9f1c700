use objdict_core::views::{FieldView, ModelSummary, ModelView, UserView};
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `odict schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_of(&args.type_name)?, flags.format)
}

fn schema_of(type_name: &str) -> anyhow::Result<Schema> {
    Ok(match type_name {
        "model" => schema_for!(ModelView),
        "model-summary" => schema_for!(ModelSummary),
        "field" => schema_for!(FieldView),
        "user" => schema_for!(UserView),
        other => anyhow::bail!(
            "unknown schema type '{other}' (expected model, model-summary, field or user)"
        ),
    })
}
