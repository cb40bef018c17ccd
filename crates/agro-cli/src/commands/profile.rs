use agro_core::entities::ProfileFields;
use agro_core::enums::{Department, Role};
use agro_db::ProfileRepo;
use agro_db::updates::ProfileUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ProfileCommands, ProfileUpdateArgs};
use crate::commands::shared::parse::{check_clear, parse_enum, patch};
use crate::context::AppContext;
use crate::output::output;

/// Handle `agrosalud profile`.
pub async fn handle(
    action: &ProfileCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProfileCommands::Get => {
            let profile = ctx.service.get_profile().await?.ok_or_else(|| {
                anyhow::anyhow!(
                    "no profile stored yet; run `agrosalud profile update` with \
                     --first-name, --last-name, --role and --department"
                )
            })?;
            output(&profile, flags.format)
        }
        ProfileCommands::Update(args) => update(args, ctx, flags).await,
    }
}

async fn update(args: &ProfileUpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    check_clear(&args.clear, &["sex"])?;
    let role = args
        .role
        .as_deref()
        .map(|value| parse_enum::<Role>(value, "role"))
        .transpose()?;
    let department = args
        .department
        .as_deref()
        .map(|value| parse_enum::<Department>(value, "department"))
        .transpose()?;
    let sex = patch(args.sex.clone(), "sex", &args.clear)?;

    if ctx.service.get_profile().await?.is_none() {
        let fields = first_profile(args, role, department, sex.flatten(), ctx)?;
        let profile = ctx.service.upsert_profile(fields).await?;
        return output(&profile, flags.format);
    }

    let mut builder = ProfileUpdateBuilder::new();
    if let Some(first_name) = &args.first_name {
        builder = builder.first_name(first_name);
    }
    if let Some(last_name) = &args.last_name {
        builder = builder.last_name(last_name);
    }
    if let Some(role) = role {
        builder = builder.role(role);
    }
    if let Some(department) = department {
        builder = builder.department(department);
    }
    if let Some(sex) = sex {
        builder = builder.sex(sex);
    }

    let profile = ctx.service.update_profile(builder.build()).await?;
    output(&profile, flags.format)
}

/// Fields for a user who has no profile yet; every required one must be given.
fn first_profile(
    args: &ProfileUpdateArgs,
    role: Option<Role>,
    department: Option<Department>,
    sex: Option<String>,
    ctx: &AppContext,
) -> anyhow::Result<ProfileFields> {
    let (Some(first_name), Some(last_name), Some(role), Some(department)) =
        (&args.first_name, &args.last_name, role, department)
    else {
        anyhow::bail!(
            "no profile stored yet; --first-name, --last-name, --role and --department are required"
        );
    };
    let email = ctx
        .session
        .identity
        .as_ref()
        .and_then(|identity| identity.email.clone())
        .unwrap_or_default();
    Ok(ProfileFields {
        first_name: first_name.clone(),
        last_name: last_name.clone(),
        email,
        role,
        department,
        sex,
    })
}
