use agro_db::medical_history;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HistoryArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `agrosalud history`: newest entries first, capped at the limit.
pub async fn handle(args: &HistoryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let history = medical_history(&ctx.service, args.animal.as_deref()).await?;
    let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);
    let entries = history
        .entries
        .into_iter()
        .take(usize::try_from(limit)?)
        .collect::<Vec<_>>();
    output(&entries, flags.format)
}
