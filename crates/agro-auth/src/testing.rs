//! Scripted [`AuthProvider`] for tests.
//!
//! Holds accounts and the current session in memory and broadcasts changes
//! like a real provider. The initial `current_session` call can be made to
//! fail or to block until released, to exercise the store's ordering rules.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use agro_core::identity::AuthIdentity;
use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use tokio::sync::{broadcast, watch};

use crate::error::AuthError;
use crate::provider::AuthProvider;
use crate::session::{AuthChange, AuthSession, Credentials, SignUpOutcome, SignUpRequest};

/// A session for `identity` that expires in an hour.
#[must_use]
pub fn session_for(identity: AuthIdentity) -> AuthSession {
    AuthSession {
        access_token: format!("access-{}", identity.user_id),
        refresh_token: Some(format!("refresh-{}", identity.user_id)),
        expires_at: Some(Utc::now() + TimeDelta::hours(1)),
        user: identity,
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct MockAuthProvider {
    events: broadcast::Sender<AuthChange>,
    current: Mutex<Option<AuthSession>>,
    accounts: Mutex<HashMap<String, (String, AuthIdentity)>>,
    current_error: Mutex<Option<AuthError>>,
    sign_out_error: Mutex<Option<AuthError>>,
    require_confirmation: bool,
    /// `true` while `current_session` calls are held back.
    hold: watch::Sender<bool>,
    current_calls: AtomicUsize,
}

impl Default for MockAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAuthProvider {
    /// No session, no accounts.
    #[must_use]
    pub fn new() -> Self {
        Self::with_event_capacity(16)
    }

    /// Like [`Self::new`] with a small event buffer, to provoke lagging receivers.
    #[must_use]
    pub fn with_event_capacity(capacity: usize) -> Self {
        let (events, _) = broadcast::channel(capacity);
        let (hold, _) = watch::channel(false);
        Self {
            events,
            current: Mutex::new(None),
            accounts: Mutex::new(HashMap::new()),
            current_error: Mutex::new(None),
            sign_out_error: Mutex::new(None),
            require_confirmation: false,
            hold,
            current_calls: AtomicUsize::new(0),
        }
    }

    /// Start with `identity` already signed in.
    #[must_use]
    pub fn signed_in_as(self, identity: AuthIdentity) -> Self {
        *lock(&self.current) = Some(session_for(identity));
        self
    }

    /// Register an account that `sign_in_with_password` accepts.
    #[must_use]
    pub fn with_account(self, email: &str, password: &str, user_id: &str) -> Self {
        lock(&self.accounts).insert(
            email.to_string(),
            (
                password.to_string(),
                AuthIdentity::new(user_id).with_email(email),
            ),
        );
        self
    }

    /// New registrations must confirm their email before a session exists.
    #[must_use]
    pub const fn requiring_confirmation(mut self) -> Self {
        self.require_confirmation = true;
        self
    }

    /// Make `current_session` return `error` until cleared.
    pub fn fail_current_session(&self, error: Option<AuthError>) {
        *lock(&self.current_error) = error;
    }

    pub fn fail_sign_out(&self, error: Option<AuthError>) {
        *lock(&self.sign_out_error) = error;
    }

    /// Block `current_session` calls until [`Self::release_current_session`].
    pub fn hold_current_session(&self) {
        self.hold.send_replace(true);
    }

    pub fn release_current_session(&self) {
        self.hold.send_replace(false);
    }

    /// Broadcast `change` as if it came from upstream, updating the session.
    pub fn emit(&self, change: AuthChange) {
        *lock(&self.current) = change.session.clone();
        let _ = self.events.send(change);
    }

    /// Number of `current_session` calls so far.
    pub fn current_session_calls(&self) -> usize {
        self.current_calls.load(Ordering::SeqCst)
    }

    fn start_session(&self, identity: AuthIdentity) -> AuthSession {
        let session = session_for(identity);
        self.emit(AuthChange::signed_in(session.clone()));
        session
    }
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    async fn current_session(&self) -> Result<Option<AuthSession>, AuthError> {
        self.current_calls.fetch_add(1, Ordering::SeqCst);
        // Answer with the state as of the call, even when held back.
        let answer = match lock(&self.current_error).clone() {
            Some(error) => Err(error),
            None => Ok(lock(&self.current).clone()),
        };
        let mut hold = self.hold.subscribe();
        // the sender lives as long as `self`
        let _ = hold.wait_for(|held| !held).await;
        answer
    }

    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthSession, AuthError> {
        credentials.validate()?;
        let identity = {
            let accounts = lock(&self.accounts);
            match accounts.get(credentials.email.trim()) {
                Some((password, identity)) if *password == credentials.password => {
                    identity.clone()
                }
                _ => return Err(AuthError::InvalidCredentials),
            }
        };
        Ok(self.start_session(identity))
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpOutcome, AuthError> {
        request.validate()?;
        let email = request.credentials.email.trim().to_string();
        let identity = {
            let mut accounts = lock(&self.accounts);
            if accounts.contains_key(&email) {
                return Err(AuthError::Provider {
                    status: 422,
                    message: "User already registered".into(),
                });
            }
            let identity =
                AuthIdentity::new(format!("user-{}", accounts.len() + 1)).with_email(&email);
            accounts.insert(
                email,
                (request.credentials.password.clone(), identity.clone()),
            );
            identity
        };
        if self.require_confirmation {
            return Ok(SignUpOutcome::ConfirmationRequired {
                user_id: identity.user_id,
            });
        }
        Ok(SignUpOutcome::SignedIn(self.start_session(identity)))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        if let Some(error) = lock(&self.sign_out_error).clone() {
            return Err(error);
        }
        self.emit(AuthChange::signed_out());
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthChange> {
        self.events.subscribe()
    }
}
