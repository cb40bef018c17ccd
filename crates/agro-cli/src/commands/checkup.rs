use agro_core::entities::NewRoutineCheckup;
use agro_core::enums::Species;
use agro_db::CheckupRepo;
use agro_db::updates::CheckupUpdateBuilder;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{CheckupCommands, CheckupUpdateArgs};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{check_clear, parse_enum, patch};
use crate::context::AppContext;
use crate::output::output;

/// Handle `agrosalud checkup`.
pub async fn handle(
    action: &CheckupCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CheckupCommands::Create(args) => {
            let checkup = ctx
                .service
                .create_checkup(NewRoutineCheckup {
                    animal_name: args.animal.clone(),
                    species: parse_enum::<Species>(&args.species, "species")?,
                    checked_on: args.date,
                    results: args.results.clone(),
                    notes: args.notes.clone(),
                })
                .await?;
            output(&checkup, flags.format)
        }
        CheckupCommands::List { animal, limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let checkups = ctx.service.list_checkups(animal.as_deref(), limit).await?;
            output(&checkups, flags.format)
        }
        CheckupCommands::Get { id } => output(&ctx.service.get_checkup(id).await?, flags.format),
        CheckupCommands::Update(args) => update(args, ctx, flags).await,
        CheckupCommands::Delete { id } => {
            ctx.service.delete_checkup(id).await?;
            output(&json!({ "id": id, "deleted": true }), flags.format)
        }
    }
}

async fn update(
    args: &CheckupUpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    check_clear(&args.clear, &["notes"])?;

    let mut builder = CheckupUpdateBuilder::new();
    if let Some(animal) = &args.animal {
        builder = builder.animal_name(animal);
    }
    if let Some(species) = &args.species {
        builder = builder.species(parse_enum::<Species>(species, "species")?);
    }
    if let Some(date) = args.date {
        builder = builder.checked_on(date);
    }
    if let Some(results) = &args.results {
        builder = builder.results(results);
    }
    if let Some(notes) = patch(args.notes.clone(), "notes", &args.clear)? {
        builder = builder.notes(notes);
    }

    let checkup = ctx.service.update_checkup(&args.id, builder.build()).await?;
    output(&checkup, flags.format)
}
