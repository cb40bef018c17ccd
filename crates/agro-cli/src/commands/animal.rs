use agro_core::entities::NewAnimal;
use agro_core::enums::{AnimalKind, Sex};
use agro_db::AnimalRepo;
use agro_db::updates::AnimalUpdateBuilder;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{AnimalCommands, AnimalCreateArgs, AnimalUpdateArgs};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{check_clear, parse_enum, patch};
use crate::context::AppContext;
use crate::output::output;

const CLEARABLE: &[&str] = &[
    "species",
    "age-months",
    "birth-date",
    "weight-kg",
    "breed",
    "purpose",
    "notes",
];

/// Handle `agrosalud animal`.
pub async fn handle(
    action: &AnimalCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AnimalCommands::Create(args) => create(args, ctx, flags).await,
        AnimalCommands::List { kind, limit } => {
            let kind = kind
                .as_deref()
                .map(|value| parse_enum::<AnimalKind>(value, "kind"))
                .transpose()?;
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let animals = ctx.service.list_animals(kind, limit).await?;
            output(&animals, flags.format)
        }
        AnimalCommands::Get { id } => output(&ctx.service.get_animal(id).await?, flags.format),
        AnimalCommands::Update(args) => update(args, ctx, flags).await,
        AnimalCommands::Delete { id } => {
            ctx.service.delete_animal(id).await?;
            output(&json!({ "id": id, "deleted": true }), flags.format)
        }
    }
}

async fn create(args: &AnimalCreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind = parse_enum::<AnimalKind>(&args.kind, "kind")?;
    let sex = parse_enum::<Sex>(&args.sex, "sex")?;

    let mut input = NewAnimal::new(kind, &args.name, &args.tag, sex);
    input.species = args.species.clone();
    input.age_months = args.age_months;
    input.birth_date = args.birth_date;
    input.weight_kg = args.weight_kg;
    input.breed = args.breed.clone();
    input.purpose = args.purpose.clone();
    input.notes = args.notes.clone();

    let animal = ctx.service.create_animal(input).await?;
    output(&animal, flags.format)
}

async fn update(args: &AnimalUpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    check_clear(&args.clear, CLEARABLE)?;

    let mut builder = AnimalUpdateBuilder::new();
    if let Some(name) = &args.name {
        builder = builder.name(name);
    }
    if let Some(tag) = &args.tag {
        builder = builder.tag_number(tag);
    }
    if let Some(sex) = &args.sex {
        builder = builder.sex(parse_enum::<Sex>(sex, "sex")?);
    }
    if let Some(species) = patch(args.species.clone(), "species", &args.clear)? {
        builder = builder.species(species);
    }
    if let Some(age_months) = patch(args.age_months, "age-months", &args.clear)? {
        builder = builder.age_months(age_months);
    }
    if let Some(birth_date) = patch(args.birth_date, "birth-date", &args.clear)? {
        builder = builder.birth_date(birth_date);
    }
    if let Some(weight_kg) = patch(args.weight_kg, "weight-kg", &args.clear)? {
        builder = builder.weight_kg(weight_kg);
    }
    if let Some(breed) = patch(args.breed.clone(), "breed", &args.clear)? {
        builder = builder.breed(breed);
    }
    if let Some(purpose) = patch(args.purpose.clone(), "purpose", &args.clear)? {
        builder = builder.purpose(purpose);
    }
    if let Some(notes) = patch(args.notes.clone(), "notes", &args.clear)? {
        builder = builder.notes(notes);
    }

    let animal = ctx.service.update_animal(&args.id, builder.build()).await?;
    output(&animal, flags.format)
}
