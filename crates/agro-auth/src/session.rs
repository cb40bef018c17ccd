//! Values exchanged with the auth provider.

use std::fmt;

use agro_core::enums::{Department, Role};
use agro_core::identity::AuthIdentity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Email and password as typed at the login prompt.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Reject obviously unusable input before any network call.
    pub fn validate(&self) -> Result<(), AuthError> {
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(AuthError::Validation("a valid email is required".into()));
        }
        if self.password.is_empty() {
            return Err(AuthError::Validation("password must not be empty".into()));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registration input: credentials plus the profile fields collected alongside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    pub credentials: Credentials,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub department: Department,
}

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

impl SignUpRequest {
    pub fn validate(&self) -> Result<(), AuthError> {
        self.credentials.validate()?;
        if self.credentials.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::Validation(format!(
                "password must have at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(AuthError::Validation(
                "first and last name are required".into(),
            ));
        }
        Ok(())
    }
}

/// A live session as issued by the provider.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub user: AuthIdentity,
}

impl AuthSession {
    /// Whether the session is expired or expires within `buffer_secs`.
    /// Sessions without a known expiry are treated as valid.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        self.expires_at.is_some_and(|expires_at| {
            expires_at <= Utc::now() + chrono::TimeDelta::seconds(buffer_secs)
        })
    }
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .field("expires_at", &self.expires_at)
            .field("user", &self.user)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
}

/// A notification pushed by the provider when its session changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthChange {
    pub event: AuthEvent,
    pub session: Option<AuthSession>,
}

impl AuthChange {
    #[must_use]
    pub const fn signed_in(session: AuthSession) -> Self {
        Self {
            event: AuthEvent::SignedIn,
            session: Some(session),
        }
    }

    #[must_use]
    pub const fn signed_out() -> Self {
        Self {
            event: AuthEvent::SignedOut,
            session: None,
        }
    }
}

/// Result of a registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The provider signed the new user in immediately.
    SignedIn(AuthSession),
    /// The account exists but the email must be confirmed before signing in.
    ConfirmationRequired { user_id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(expires_at: Option<DateTime<Utc>>) -> AuthSession {
        AuthSession {
            access_token: "secret-access".into(),
            refresh_token: Some("secret-refresh".into()),
            expires_at,
            user: AuthIdentity::new("user-1"),
        }
    }

    #[test]
    fn debug_output_hides_secrets() {
        let rendered = format!("{:?}", session(None));
        assert!(!rendered.contains("secret-access"));
        assert!(!rendered.contains("secret-refresh"));

        let rendered = format!("{:?}", Credentials::new("a@b.co", "hunter2"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn near_expiry_window() {
        let now = Utc::now();
        assert!(session(Some(now - chrono::TimeDelta::seconds(5))).is_near_expiry(60));
        assert!(session(Some(now + chrono::TimeDelta::seconds(30))).is_near_expiry(60));
        assert!(!session(Some(now + chrono::TimeDelta::seconds(600))).is_near_expiry(60));
        assert!(!session(None).is_near_expiry(60));
    }

    #[test]
    fn credentials_validation() {
        assert!(Credentials::new("ana@example.com", "pw").validate().is_ok());
        assert!(Credentials::new("not-an-email", "pw").validate().is_err());
        assert!(Credentials::new("ana@example.com", "").validate().is_err());
    }

    #[test]
    fn sign_up_requires_names_and_long_password() {
        let mut request = SignUpRequest {
            credentials: Credentials::new("ana@example.com", "12345"),
            first_name: "Ana".into(),
            last_name: "López".into(),
            role: Role::Farmer,
            department: Department::Matagalpa,
        };
        assert!(request.validate().is_err());
        request.credentials.password = "123456".into();
        assert!(request.validate().is_ok());
        request.last_name = " ".into();
        assert!(request.validate().is_err());
    }
}
