use agro_core::entities::NewVaccination;
use agro_core::enums::Species;
use agro_db::VaccinationRepo;
use agro_db::updates::VaccinationUpdateBuilder;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{VaccinationCommands, VaccinationUpdateArgs};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{check_clear, parse_enum, patch};
use crate::context::AppContext;
use crate::output::output;

/// Handle `agrosalud vaccination`.
pub async fn handle(
    action: &VaccinationCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        VaccinationCommands::Create(args) => {
            let species = parse_enum::<Species>(&args.species, "species")?;
            let vaccination = ctx
                .service
                .create_vaccination(NewVaccination {
                    animal_name: args.animal.clone(),
                    species,
                    vaccine: args.vaccine.clone(),
                    vaccinated_on: args.date,
                    notes: args.notes.clone(),
                })
                .await?;
            output(&vaccination, flags.format)
        }
        VaccinationCommands::List { animal, limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let vaccinations = ctx.service.list_vaccinations(animal.as_deref(), limit).await?;
            output(&vaccinations, flags.format)
        }
        VaccinationCommands::Get { id } => {
            output(&ctx.service.get_vaccination(id).await?, flags.format)
        }
        VaccinationCommands::Update(args) => update(args, ctx, flags).await,
        VaccinationCommands::Delete { id } => {
            ctx.service.delete_vaccination(id).await?;
            output(&json!({ "id": id, "deleted": true }), flags.format)
        }
    }
}

async fn update(
    args: &VaccinationUpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    check_clear(&args.clear, &["notes"])?;

    let mut builder = VaccinationUpdateBuilder::new();
    if let Some(animal) = &args.animal {
        builder = builder.animal_name(animal);
    }
    if let Some(species) = &args.species {
        builder = builder.species(parse_enum::<Species>(species, "species")?);
    }
    if let Some(vaccine) = &args.vaccine {
        builder = builder.vaccine(vaccine);
    }
    if let Some(date) = args.date {
        builder = builder.vaccinated_on(date);
    }
    if let Some(notes) = patch(args.notes.clone(), "notes", &args.clear)? {
        builder = builder.notes(notes);
    }

    let vaccination = ctx.service.update_vaccination(&args.id, builder.build()).await?;
    output(&vaccination, flags.format)
}
