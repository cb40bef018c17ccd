use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lightweight authenticated user identity for cross-crate passing.
///
/// Produced by `agro-auth`, consumed by `agro-db` to stamp and filter rows
/// by owner. Contains only data fields, no provider calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuthIdentity {
    /// Provider user ID (UUID string). Used as `owner_id` on every row.
    pub user_id: String,
    /// Email the user signed in with, when the provider reports one.
    pub email: Option<String>,
}

impl AuthIdentity {
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: None,
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
