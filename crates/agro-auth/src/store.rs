//! The session store: who is signed in, and whether we know yet.
//!
//! A [`SessionStore`] is mounted against an [`AuthProvider`]. Mounting
//! subscribes to provider events first and then starts the initial session
//! fetch, so a change that happens while the fetch is in flight is never
//! missed. Both are handled by one listener task that owns the write side of
//! a `watch` channel; readers take snapshots or subscribe.
//!
//! `resolved` flips to `true` exactly once, when the first of these lands:
//! the initial fetch, a provider event, or a local `sign_in`/`sign_out`.
//! After any identity change has been applied, a late initial fetch only
//! marks the store resolved and never overwrites the newer identity.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use agro_core::entities::UserProfile;
use agro_core::identity::AuthIdentity;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

use crate::error::AuthError;
use crate::provider::AuthProvider;
use crate::session::{AuthChange, AuthEvent, AuthSession, Credentials, SignUpOutcome, SignUpRequest};

/// Snapshot of the session as seen by guards and commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub identity: Option<AuthIdentity>,
    /// Profile row of `identity`, attached after it was fetched from the store.
    pub profile: Option<UserProfile>,
    pub resolved: bool,
}

impl SessionState {
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.identity.as_ref().map(|identity| identity.user_id.as_str())
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

struct Shared {
    state: watch::Sender<SessionState>,
    /// Set once an identity change has been applied; the initial fetch defers to it.
    settled: AtomicBool,
}

impl Shared {
    fn apply_identity(&self, identity: Option<AuthIdentity>) {
        self.state.send_if_modified(|state| {
            self.settled.store(true, Ordering::SeqCst);
            let before = state.clone();
            if state.user_id() != identity.as_ref().map(|i| i.user_id.as_str()) {
                state.profile = None;
            }
            state.identity = identity;
            state.resolved = true;
            *state != before
        });
    }

    fn apply_initial(&self, identity: Option<AuthIdentity>) {
        self.state.send_if_modified(|state| {
            if self.settled.load(Ordering::SeqCst) {
                tracing::debug!("initial session fetch superseded by a newer change");
                let changed = !state.resolved;
                state.resolved = true;
                return changed;
            }
            let changed = !state.resolved || state.identity != identity;
            state.identity = identity;
            state.resolved = true;
            changed
        });
    }

    fn mark_resolved(&self) {
        self.state.send_if_modified(|state| {
            let changed = !state.resolved;
            state.resolved = true;
            changed
        });
    }

    fn apply_change(&self, change: AuthChange) {
        tracing::debug!(event = ?change.event, "auth state change");
        match change.event {
            AuthEvent::SignedIn => match change.session {
                Some(session) => self.apply_identity(Some(session.user)),
                None => {
                    tracing::warn!("signed-in event without a session; ignoring identity");
                    self.mark_resolved();
                }
            },
            AuthEvent::SignedOut => self.apply_identity(None),
        }
    }
}

/// Shared, observable session state backed by an auth provider.
///
/// Dropping the store (or calling [`SessionStore::shutdown`]) stops the
/// listener and releases the provider subscription.
pub struct SessionStore {
    provider: Arc<dyn AuthProvider>,
    shared: Arc<Shared>,
    listener: Option<JoinHandle<()>>,
}

impl SessionStore {
    /// Subscribe to `provider` and start resolving the current session.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(provider: Arc<dyn AuthProvider>) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        let shared = Arc::new(Shared {
            state,
            settled: AtomicBool::new(false),
        });
        let events = provider.subscribe();
        let listener = tokio::spawn(listen(Arc::clone(&provider), Arc::clone(&shared), events));
        Self {
            provider,
            shared,
            listener: Some(listener),
        }
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.shared.state.borrow().clone()
    }

    #[must_use]
    pub fn identity(&self) -> Option<AuthIdentity> {
        self.shared.state.borrow().identity.clone()
    }

    /// Receiver notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.shared.state.subscribe()
    }

    /// Wait until the store is resolved and return that snapshot.
    ///
    /// Never returns if the provider neither answers the initial fetch nor
    /// emits an event; callers that cannot wait forever add a timeout.
    pub async fn wait_resolved(&self) -> SessionState {
        let mut receiver = self.subscribe();
        receiver
            .wait_for(|state| state.resolved)
            .await
            .map(|state| state.clone())
            // the sender lives in `self.shared`, so this cannot fail
            .unwrap_or_else(|_| self.state())
    }

    pub async fn sign_in(&self, credentials: &Credentials) -> Result<AuthIdentity, AuthError> {
        match self.provider.sign_in_with_password(credentials).await {
            Ok(session) => Ok(self.store_session(session)),
            Err(error) => {
                tracing::warn!(%error, "sign in failed");
                Err(error)
            }
        }
    }

    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpOutcome, AuthError> {
        let outcome = self.provider.sign_up(request).await.inspect_err(|error| {
            tracing::warn!(%error, "sign up failed");
        })?;
        if let SignUpOutcome::SignedIn(session) = &outcome {
            self.store_session(session.clone());
        }
        Ok(outcome)
    }

    /// Sign out upstream, then clear identity and profile.
    ///
    /// On failure the identity is kept and the error returned.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        if let Err(error) = self.provider.sign_out().await {
            tracing::warn!(%error, "sign out failed; keeping session");
            return Err(error);
        }
        self.shared.apply_identity(None);
        Ok(())
    }

    /// Attach the profile fetched for the signed-in user.
    ///
    /// Returns `false` (and stores nothing) when `profile` belongs to anyone
    /// other than the current identity.
    pub fn attach_profile(&self, profile: UserProfile) -> bool {
        let mut accepted = false;
        self.shared.state.send_if_modified(|state| {
            if state.user_id() == Some(profile.user_id.as_str()) {
                accepted = true;
                let changed = state.profile.as_ref() != Some(&profile);
                state.profile = Some(profile);
                changed
            } else {
                false
            }
        });
        if !accepted {
            tracing::warn!("rejected profile that does not belong to the signed-in user");
        }
        accepted
    }

    /// Stop listening to the provider and wait for the listener to finish.
    pub async fn shutdown(mut self) {
        if let Some(listener) = self.listener.take() {
            listener.abort();
            let _ = listener.await;
        }
    }

    fn store_session(&self, session: AuthSession) -> AuthIdentity {
        let identity = session.user;
        tracing::debug!(user_id = %identity.user_id, "session stored");
        self.shared.apply_identity(Some(identity.clone()));
        identity
    }
}

impl Drop for SessionStore {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.abort();
        }
    }
}

fn identity_of(result: Result<Option<AuthSession>, AuthError>) -> Option<AuthIdentity> {
    match result {
        Ok(session) => session.map(|session| session.user),
        Err(error) => {
            tracing::warn!(%error, "could not fetch current session; treating as signed out");
            None
        }
    }
}

async fn listen(
    provider: Arc<dyn AuthProvider>,
    shared: Arc<Shared>,
    mut events: broadcast::Receiver<AuthChange>,
) {
    let initial = provider.current_session();
    tokio::pin!(initial);
    let mut initial_done = false;

    loop {
        tokio::select! {
            result = &mut initial, if !initial_done => {
                initial_done = true;
                shared.apply_initial(identity_of(result));
            }
            received = events.recv() => match received {
                Ok(change) => shared.apply_change(change),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "auth events lagged; re-reading current session");
                    match provider.current_session().await {
                        Ok(session) => shared.apply_identity(session.map(|s| s.user)),
                        Err(error) => {
                            tracing::warn!(%error, "could not re-read session; keeping state");
                            shared.mark_resolved();
                        }
                    }
                }
                Err(RecvError::Closed) => {
                    if !initial_done {
                        shared.apply_initial(identity_of((&mut initial).await));
                    }
                    break;
                }
            }
        }
    }
    tracing::debug!("session listener stopped");
}
