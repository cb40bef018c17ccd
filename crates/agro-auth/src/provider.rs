//! The contract the session store depends on.

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::error::AuthError;
use crate::session::{AuthChange, AuthSession, Credentials, SignUpOutcome, SignUpRequest};

/// An external identity service.
///
/// Implementations must deliver every session change (including ones caused
/// by their own `sign_in_with_password` / `sign_out`) to all receivers handed
/// out by [`AuthProvider::subscribe`].
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// The session currently held by the provider, if any.
    async fn current_session(&self) -> Result<Option<AuthSession>, AuthError>;

    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthSession, AuthError>;

    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpOutcome, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    /// A fresh receiver for session change notifications.
    fn subscribe(&self) -> broadcast::Receiver<AuthChange>;
}
