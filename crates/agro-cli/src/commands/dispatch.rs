use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a record command once its route guard has passed.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Animal { action } => commands::animal::handle(&action, ctx, flags).await,
        Commands::Vaccination { action } => commands::vaccination::handle(&action, ctx, flags).await,
        Commands::Monitoring { action } => commands::monitoring::handle(&action, ctx, flags).await,
        Commands::Treatment { action } => commands::treatment::handle(&action, ctx, flags).await,
        Commands::Checkup { action } => commands::checkup::handle(&action, ctx, flags).await,
        Commands::History(args) => commands::history::handle(&args, ctx, flags).await,
        Commands::Profile { action } => commands::profile::handle(&action, ctx, flags).await,
        Commands::Auth { .. } | Commands::Vaccines(_) | Commands::Schema(_) => {
            unreachable!("auth/vaccines/schema are handled before the record store opens")
        }
    }
}
