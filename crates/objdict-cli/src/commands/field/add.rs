use objdict_core::CommandRepository;
use objdict_core::entities::FieldRecord;
use objdict_core::views::FieldView;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_id;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    model: &str,
    name: &str,
    type_name: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let model_id = parse_id(model, "model id")?;
    let field = FieldRecord::new(model_id, name, type_name)?;
    ctx.fields.create(&field)?;
    output(&FieldView::from(field), flags.format)
}
