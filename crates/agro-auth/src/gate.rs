//! Route guards: render, redirect, or wait, decided from a session snapshot.

use tokio::sync::watch;

use crate::routes::Route;
use crate::store::SessionState;

/// Where a session stands, as far as navigation is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    Loading,
    Authenticated,
    Anonymous,
}

impl From<&SessionState> for GatePhase {
    fn from(state: &SessionState) -> Self {
        if !state.resolved {
            Self::Loading
        } else if state.identity.is_some() {
            Self::Authenticated
        } else {
            Self::Anonymous
        }
    }
}

/// What a guard tells the caller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision<T> {
    /// Show the loading placeholder; nothing is decided yet.
    Loading,
    Redirect(Route),
    Render(T),
}

impl<T> GateDecision<T> {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> GateDecision<U> {
        match self {
            Self::Loading => GateDecision::Loading,
            Self::Redirect(route) => GateDecision::Redirect(route),
            Self::Render(content) => GateDecision::Render(f(content)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Render for signed-in users, send everyone else to `/login`.
    AuthenticatedOnly,
    /// Render for anonymous users, send signed-in users to `/`.
    AnonymousOnly,
}

impl Gate {
    /// The decision for `state`, without content.
    #[must_use]
    pub fn decide(self, state: &SessionState) -> GateDecision<()> {
        self.guard(state, || ())
    }

    /// Wrap `content`; it is only built when the decision is `Render`.
    pub fn guard<T>(self, state: &SessionState, content: impl FnOnce() -> T) -> GateDecision<T> {
        match (self, GatePhase::from(state)) {
            (_, GatePhase::Loading) => GateDecision::Loading,
            (Self::AuthenticatedOnly, GatePhase::Anonymous) => {
                GateDecision::Redirect(Route::LOGIN_REDIRECT)
            }
            (Self::AnonymousOnly, GatePhase::Authenticated) => {
                GateDecision::Redirect(Route::HOME_REDIRECT)
            }
            (Self::AuthenticatedOnly, GatePhase::Authenticated)
            | (Self::AnonymousOnly, GatePhase::Anonymous) => GateDecision::Render(content()),
        }
    }

    /// Wait for the store behind `receiver` to resolve, then decide.
    ///
    /// If the store goes away before resolving, the last snapshot is decided
    /// on (which yields `Loading`).
    pub async fn settle(self, receiver: &mut watch::Receiver<SessionState>) -> GateDecision<()> {
        let resolved = receiver
            .wait_for(|state| state.resolved)
            .await
            .map(|state| state.clone());
        let state = match resolved {
            Ok(state) => state,
            Err(_) => receiver.borrow().clone(),
        };
        self.decide(&state)
    }

    /// Wait for the next store change and decide on it.
    ///
    /// Returns `None` once the store has shut down.
    pub async fn next(
        self,
        receiver: &mut watch::Receiver<SessionState>,
    ) -> Option<GateDecision<()>> {
        receiver.changed().await.ok()?;
        let state = receiver.borrow_and_update().clone();
        Some(self.decide(&state))
    }
}
