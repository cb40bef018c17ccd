#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("agrosalud error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    // Commands that need neither a session nor a database.
    match &cli.command {
        cli::Commands::Schema(args) => return commands::schema::handle(args, &flags),
        cli::Commands::Vaccines(args) => return commands::vaccines::handle(args, &flags),
        _ => {}
    }

    let config = agro_config::AgroConfig::load_with_dotenv()
        .context("failed to load agrosalud configuration")?;
    config.validate()?;

    let auth = context::AuthContext::mount(&config)?;
    let result = run_gated(cli.command, &auth, config, &flags).await;
    auth.shutdown().await;
    result
}

async fn run_gated(
    command: cli::Commands,
    auth: &context::AuthContext,
    config: agro_config::AgroConfig,
    flags: &cli::GlobalFlags,
) -> anyhow::Result<()> {
    let state = match command.route() {
        Some(route) => auth.enter(route).await?,
        None => auth.resolved().await?,
    };

    if let cli::Commands::Auth { action } = &command {
        return commands::auth::handle(action, auth, &config, flags).await;
    }

    let ctx = context::AppContext::open(config, state)
        .await
        .context("failed to open the agrosalud record store")?;
    commands::dispatch::dispatch(command, &ctx, flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("AGROSALUD_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
