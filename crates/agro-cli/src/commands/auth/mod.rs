mod login;
mod logout;
mod register;
mod status;

use agro_config::AgroConfig;
use agro_core::entities::UserProfile;
use agro_core::identity::AuthIdentity;
use agro_db::{AgroService, ProfileRepo};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AuthContext;

/// Handle `agrosalud auth <subcommand>`. The route guard has already run.
pub async fn handle(
    action: &AuthCommands,
    auth: &AuthContext,
    config: &AgroConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, auth, config, flags).await,
        AuthCommands::Register(args) => register::handle(args, auth, config, flags).await,
        AuthCommands::Logout => logout::handle(auth, flags).await,
        AuthCommands::Status => status::handle(auth, flags),
    }
}

/// Fetch `identity`'s stored profile and attach it to the session store.
///
/// A missing profile or a store failure only costs the profile; the sign-in
/// itself already succeeded.
async fn attach_stored_profile(
    auth: &AuthContext,
    config: &AgroConfig,
    identity: &AuthIdentity,
) -> Option<UserProfile> {
    let fetched = match AgroService::open(&config.database, Some(identity.clone())).await {
        Ok(service) => service.get_profile().await,
        Err(error) => Err(error),
    };
    match fetched {
        Ok(Some(profile)) => {
            auth.store().attach_profile(profile.clone());
            Some(profile)
        }
        Ok(None) => None,
        Err(error) => {
            tracing::warn!(%error, "failed to load profile after sign in");
            None
        }
    }
}
