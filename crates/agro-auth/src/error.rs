use thiserror::Error;

/// Failures reported by the auth provider or the credential store.
///
/// `Clone` so a provider can hand the same failure to several callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("session expired; run `agrosalud auth login` again")]
    SessionExpired,

    #[error("not signed in; run `agrosalud auth login`")]
    NotAuthenticated,

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("auth provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("auth request failed: {0}")]
    Http(String),

    #[error("token store error: {0}")]
    TokenStore(String),

    #[error("{0}")]
    Other(String),
}
