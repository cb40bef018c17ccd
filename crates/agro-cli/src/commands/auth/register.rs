use agro_auth::{Credentials, SignUpOutcome, SignUpRequest};
use agro_config::AgroConfig;
use agro_core::entities::{ProfileFields, UserProfile};
use agro_core::enums::{Department, Role};
use agro_db::{AgroService, ProfileRepo};
use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthRegisterArgs;
use crate::commands::shared::parse::{parse_enum, password_or_stdin};
use crate::context::AuthContext;
use crate::output::output;

#[derive(Serialize)]
struct RegisterResponse {
    status: &'static str,
    user_id: String,
    profile: Option<UserProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'static str>,
}

pub async fn handle(
    args: &AuthRegisterArgs,
    auth: &AuthContext,
    config: &AgroConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let role = parse_enum::<Role>(&args.role, "role")?;
    let department = parse_enum::<Department>(&args.department, "department")?;
    let request = SignUpRequest {
        credentials: Credentials::new(
            args.email.trim(),
            password_or_stdin(args.password.as_deref())?,
        ),
        first_name: args.first_name.clone(),
        last_name: args.last_name.clone(),
        role,
        department,
    };
    request.validate()?;

    let response = match auth.store().sign_up(&request).await? {
        SignUpOutcome::SignedIn(session) => {
            let service = AgroService::open(&config.database, Some(session.user.clone())).await?;
            let profile = service
                .upsert_profile(ProfileFields {
                    first_name: request.first_name,
                    last_name: request.last_name,
                    email: request.credentials.email,
                    role,
                    department,
                    sex: args.sex.clone(),
                })
                .await
                .context("account created but storing the profile failed")?;
            auth.store().attach_profile(profile.clone());
            RegisterResponse {
                status: "signed_in",
                user_id: session.user.user_id,
                profile: Some(profile),
                note: None,
            }
        }
        SignUpOutcome::ConfirmationRequired { user_id } => RegisterResponse {
            status: "confirmation_required",
            user_id,
            profile: None,
            note: Some(
                "confirm the email, then run `agrosalud auth login` and `agrosalud profile update`",
            ),
        },
    };

    output(&response, flags.format)
}
