use objdict_core::CommandRepository;
use objdict_core::entities::UserRecord;
use objdict_core::views::UserView;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(name: &str, email: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = UserRecord::new(name, email.map(str::to_string))?;
    ctx.users.create(&user)?;
    output(&UserView::from(user), flags.format)
}
