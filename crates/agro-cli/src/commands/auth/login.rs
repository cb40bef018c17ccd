use agro_auth::Credentials;
use agro_config::AgroConfig;
use agro_core::entities::UserProfile;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::commands::shared::parse::password_or_stdin;
use crate::context::AuthContext;
use crate::output::output;

#[derive(Serialize)]
struct LoginResponse {
    status: &'static str,
    user_id: String,
    email: Option<String>,
    profile: Option<UserProfile>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    auth: &AuthContext,
    config: &AgroConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let credentials = Credentials::new(args.email.trim(), password_or_stdin(args.password.as_deref())?);
    credentials.validate()?;

    let identity = auth.store().sign_in(&credentials).await?;
    let profile = super::attach_stored_profile(auth, config, &identity).await;

    output(
        &LoginResponse {
            status: "signed_in",
            user_id: identity.user_id,
            email: identity.email,
            profile,
        },
        flags.format,
    )
}
