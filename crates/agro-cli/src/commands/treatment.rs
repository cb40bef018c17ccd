use agro_core::entities::NewTreatment;
use agro_core::enums::Species;
use agro_db::TreatmentRepo;
use agro_db::updates::TreatmentUpdateBuilder;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{TreatmentCommands, TreatmentUpdateArgs};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{check_clear, parse_enum, patch};
use crate::context::AppContext;
use crate::output::output;

/// Handle `agrosalud treatment`.
pub async fn handle(
    action: &TreatmentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TreatmentCommands::Create(args) => {
            let treatment = ctx
                .service
                .create_treatment(NewTreatment {
                    animal_name: args.animal.clone(),
                    species: parse_enum::<Species>(&args.species, "species")?,
                    treatment: args.treatment.clone(),
                    started_on: args.started_on,
                    ended_on: args.ended_on,
                    notes: args.notes.clone(),
                })
                .await?;
            output(&treatment, flags.format)
        }
        TreatmentCommands::List { animal, limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let treatments = ctx.service.list_treatments(animal.as_deref(), limit).await?;
            output(&treatments, flags.format)
        }
        TreatmentCommands::Get { id } => {
            output(&ctx.service.get_treatment(id).await?, flags.format)
        }
        TreatmentCommands::Update(args) => update(args, ctx, flags).await,
        TreatmentCommands::Delete { id } => {
            ctx.service.delete_treatment(id).await?;
            output(&json!({ "id": id, "deleted": true }), flags.format)
        }
    }
}

async fn update(
    args: &TreatmentUpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    check_clear(&args.clear, &["ended-on", "notes"])?;

    let mut builder = TreatmentUpdateBuilder::new();
    if let Some(animal) = &args.animal {
        builder = builder.animal_name(animal);
    }
    if let Some(species) = &args.species {
        builder = builder.species(parse_enum::<Species>(species, "species")?);
    }
    if let Some(treatment) = &args.treatment {
        builder = builder.treatment(treatment);
    }
    if let Some(started_on) = args.started_on {
        builder = builder.started_on(started_on);
    }
    if let Some(ended_on) = patch(args.ended_on, "ended-on", &args.clear)? {
        builder = builder.ended_on(ended_on);
    }
    if let Some(notes) = patch(args.notes.clone(), "notes", &args.clear)? {
        builder = builder.notes(notes);
    }

    let treatment = ctx.service.update_treatment(&args.id, builder.build()).await?;
    output(&treatment, flags.format)
}
