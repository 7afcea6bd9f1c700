use objdict_core::QueryRepository;
use objdict_core::views::UserView;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_id;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx.users.get_by_id(&parse_id(id, "user id")?)?;
    output(&UserView::from(user), flags.format)
}
