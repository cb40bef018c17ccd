//! `AuthProvider` over a GoTrue-compatible REST API (`{base}/auth/v1`).
//!
//! The session is cached in memory and persisted through a [`TokenStore`] so
//! that separate CLI invocations share it. Sessions that expire within
//! [`REFRESH_BUFFER_SECS`] are refreshed on read.

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tokio::sync::{Mutex, broadcast};

use agro_core::identity::AuthIdentity;

use crate::error::AuthError;
use crate::expiry::decode_expiry;
use crate::provider::AuthProvider;
use crate::session::{AuthChange, AuthSession, Credentials, SignUpOutcome, SignUpRequest};
use crate::token_store::TokenStore;

pub const REFRESH_BUFFER_SECS: i64 = 60;

const EVENT_CAPACITY: usize = 16;

pub struct RestAuthProvider {
    client: reqwest::Client,
    auth_url: String,
    anon_key: String,
    tokens: Option<TokenStore>,
    cached: Mutex<Option<AuthSession>>,
    events: broadcast::Sender<AuthChange>,
}

impl RestAuthProvider {
    /// Provider for the project at `base_url`, keeping the session in memory only.
    pub fn new(base_url: &str, anon_key: impl Into<String>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            client: reqwest::Client::new(),
            auth_url: format!("{}/auth/v1", base_url.trim_end_matches('/')),
            anon_key: anon_key.into(),
            tokens: None,
            cached: Mutex::new(None),
            events,
        }
    }

    /// Persist the session through `tokens` across process restarts.
    #[must_use]
    pub fn with_token_store(mut self, tokens: TokenStore) -> Self {
        self.tokens = Some(tokens);
        self
    }

    async fn refresh(&self, refresh_token: &str) -> Result<AuthSession, AuthError> {
        let url = format!("{}/token?grant_type=refresh_token", self.auth_url);
        let response: TokenResponse = self
            .post(&url, &json!({ "refresh_token": refresh_token }), None)
            .await
            .map_err(|error| match error {
                AuthError::Provider { status, .. } if (400..500).contains(&status) => {
                    AuthError::SessionExpired
                }
                other => other,
            })?;
        Ok(response.into_session())
    }

    fn persist(&self, session: &AuthSession) {
        if let Some(tokens) = &self.tokens
            && let Err(error) = tokens.save(session)
        {
            tracing::warn!(%error, "could not persist session");
        }
    }

    fn forget(&self) {
        if let Some(tokens) = &self.tokens
            && let Err(error) = tokens.clear()
        {
            tracing::warn!(%error, "could not clear stored session");
        }
    }

    fn emit(&self, change: AuthChange) {
        // no receivers is fine
        let _ = self.events.send(change);
    }

    async fn post<T: DeserializeOwned>(
        &self,
        url: &str,
        body: &serde_json::Value,
        bearer: Option<&str>,
    ) -> Result<T, AuthError> {
        let mut request = self
            .client
            .post(url)
            .header("apikey", &self.anon_key)
            .json(body);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        let response = request
            .send()
            .await
            .map_err(|e| AuthError::Http(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AuthError::Http(format!("read body: {e}")))?;

        if !(200..300).contains(&status) {
            return Err(provider_error(status, &text));
        }
        let text = if text.trim().is_empty() { "null" } else { &text };
        serde_json::from_str(text)
            .map_err(|e| AuthError::Other(format!("unexpected auth response: {e}")))
    }
}

#[async_trait]
impl AuthProvider for RestAuthProvider {
    async fn current_session(&self) -> Result<Option<AuthSession>, AuthError> {
        let mut cached = self.cached.lock().await;
        if cached.is_none() {
            *cached = self.tokens.as_ref().and_then(TokenStore::load);
        }
        let Some(session) = cached.clone() else {
            return Ok(None);
        };
        if !session.is_near_expiry(REFRESH_BUFFER_SECS) {
            return Ok(Some(session));
        }

        tracing::debug!(user_id = %session.user.user_id, "refreshing session");
        let Some(refresh_token) = session.refresh_token.as_deref() else {
            *cached = None;
            self.forget();
            return Err(AuthError::SessionExpired);
        };
        match self.refresh(refresh_token).await {
            Ok(fresh) => {
                self.persist(&fresh);
                *cached = Some(fresh.clone());
                Ok(Some(fresh))
            }
            Err(AuthError::SessionExpired) => {
                *cached = None;
                self.forget();
                Err(AuthError::SessionExpired)
            }
            Err(error) => Err(error),
        }
    }

    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthSession, AuthError> {
        credentials.validate()?;
        let url = format!("{}/token?grant_type=password", self.auth_url);
        let body = json!({
            "email": credentials.email.trim(),
            "password": credentials.password,
        });
        let response: TokenResponse = self.post(&url, &body, None).await.map_err(|error| {
            match error {
                AuthError::Provider { status: 400, .. } => AuthError::InvalidCredentials,
                other => other,
            }
        })?;
        let session = response.into_session();

        self.persist(&session);
        *self.cached.lock().await = Some(session.clone());
        self.emit(AuthChange::signed_in(session.clone()));
        Ok(session)
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpOutcome, AuthError> {
        request.validate()?;
        let url = format!("{}/signup", self.auth_url);
        let body = json!({
            "email": request.credentials.email.trim(),
            "password": request.credentials.password,
            "data": {
                "first_name": request.first_name.trim(),
                "last_name": request.last_name.trim(),
                "role": request.role.as_str(),
                "department": request.department.as_str(),
            },
        });
        match self.post::<SignUpResponse>(&url, &body, None).await? {
            SignUpResponse::Session(response) => {
                let session = response.into_session();
                self.persist(&session);
                *self.cached.lock().await = Some(session.clone());
                self.emit(AuthChange::signed_in(session.clone()));
                Ok(SignUpOutcome::SignedIn(session))
            }
            SignUpResponse::User(user) => {
                Ok(SignUpOutcome::ConfirmationRequired { user_id: user.id })
            }
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let mut cached = self.cached.lock().await;
        if cached.is_none() {
            *cached = self.tokens.as_ref().and_then(TokenStore::load);
        }
        if let Some(session) = cached.as_ref() {
            let url = format!("{}/logout", self.auth_url);
            match self
                .post::<serde_json::Value>(&url, &json!({}), Some(&session.access_token))
                .await
            {
                Ok(_) => {}
                Err(AuthError::Provider {
                    status: 401 | 403 | 404,
                    ..
                }) => tracing::debug!("session already revoked upstream"),
                Err(error) => return Err(error),
            }
        }
        *cached = None;
        self.forget();
        self.emit(AuthChange::signed_out());
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthChange> {
        self.events.subscribe()
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: String,
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    expires_in: Option<i64>,
    expires_at: Option<i64>,
    user: UserResponse,
}

impl TokenResponse {
    fn into_session(self) -> AuthSession {
        let expires_at = self
            .expires_at
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .or_else(|| self.expires_in.map(|secs| Utc::now() + TimeDelta::seconds(secs)))
            .or_else(|| decode_expiry(&self.access_token).ok());
        let mut user = AuthIdentity::new(self.user.id);
        user.email = self.user.email;
        AuthSession {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(TokenResponse),
    User(UserResponse),
}

#[derive(Debug, Default, Deserialize)]
struct ErrorResponse {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

fn provider_error(status: u16, body: &str) -> AuthError {
    let parsed: ErrorResponse = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .error_description
        .or(parsed.msg)
        .or(parsed.message)
        .or(parsed.error)
        .unwrap_or_else(|| body.trim().to_string());
    AuthError::Provider { status, message }
}
