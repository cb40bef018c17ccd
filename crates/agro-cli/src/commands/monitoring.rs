use agro_core::entities::NewMedicalMonitoring;
use agro_core::enums::Species;
use agro_db::MonitoringRepo;
use agro_db::updates::MonitoringUpdateBuilder;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{MonitoringCommands, MonitoringUpdateArgs};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `agrosalud monitoring`.
pub async fn handle(
    action: &MonitoringCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        MonitoringCommands::Create(args) => {
            let record = ctx
                .service
                .create_monitoring(NewMedicalMonitoring {
                    animal_name: args.animal.clone(),
                    species: parse_enum::<Species>(&args.species, "species")?,
                    consulted_on: args.date,
                    diagnosis: args.diagnosis.clone(),
                    activity_level: args.activity.clone(),
                })
                .await?;
            output(&record, flags.format)
        }
        MonitoringCommands::List { animal, limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let records = ctx.service.list_monitoring(animal.as_deref(), limit).await?;
            output(&records, flags.format)
        }
        MonitoringCommands::Get { id } => {
            output(&ctx.service.get_monitoring(id).await?, flags.format)
        }
        MonitoringCommands::Update(args) => update(args, ctx, flags).await,
        MonitoringCommands::Delete { id } => {
            ctx.service.delete_monitoring(id).await?;
            output(&json!({ "id": id, "deleted": true }), flags.format)
        }
    }
}

async fn update(
    args: &MonitoringUpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut builder = MonitoringUpdateBuilder::new();
    if let Some(animal) = &args.animal {
        builder = builder.animal_name(animal);
    }
    if let Some(species) = &args.species {
        builder = builder.species(parse_enum::<Species>(species, "species")?);
    }
    if let Some(date) = args.date {
        builder = builder.consulted_on(date);
    }
    if let Some(diagnosis) = &args.diagnosis {
        builder = builder.diagnosis(diagnosis);
    }
    if let Some(activity) = &args.activity {
        builder = builder.activity_level(activity);
    }

    let record = ctx.service.update_monitoring(&args.id, builder.build()).await?;
    output(&record, flags.format)
}
