use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AuthContext;
use crate::output::output;

#[derive(Serialize)]
struct LogoutResponse {
    signed_out: bool,
    user_id: Option<String>,
}

pub async fn handle(auth: &AuthContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user_id = auth.store().state().user_id().map(str::to_string);
    auth.store().sign_out().await?;
    output(
        &LogoutResponse {
            signed_out: true,
            user_id,
        },
        flags.format,
    )
}
