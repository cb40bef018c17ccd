use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AuthContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    status: &'static str,
    user_id: Option<String>,
    email: Option<String>,
    expires_at: Option<String>,
    token_source: Option<&'static str>,
}

/// Report the resolved session; never fails for an anonymous user.
pub fn handle(auth: &AuthContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let state = auth.store().state();
    let stored = auth.tokens().and_then(|tokens| tokens.load_with_source());

    let response = match state.identity {
        Some(identity) => AuthStatusResponse {
            status: "authenticated",
            user_id: Some(identity.user_id),
            email: identity.email,
            expires_at: stored
                .as_ref()
                .and_then(|(session, _)| session.expires_at)
                .map(|at| at.to_rfc3339()),
            token_source: stored.as_ref().map(|(_, source)| source.as_str()),
        },
        None => AuthStatusResponse {
            status: "anonymous",
            user_id: None,
            email: None,
            expires_at: None,
            token_source: None,
        },
    };

    output(&response, flags.format)
}
