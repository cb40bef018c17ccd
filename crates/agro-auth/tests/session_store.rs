//! Session store behaviour against the scripted provider.

use std::sync::Arc;
use std::time::Duration;

use agro_auth::testing::{MockAuthProvider, session_for};
use agro_auth::{AuthChange, AuthError, Credentials, SessionState, SessionStore, SignUpOutcome, SignUpRequest};
use agro_core::entities::UserProfile;
use agro_core::enums::{Department, Role};
use agro_core::identity::AuthIdentity;
use chrono::Utc;
use pretty_assertions::assert_eq;
use tokio::sync::watch;
use tokio::time::timeout;

const WAIT: Duration = Duration::from_secs(2);

async fn until(
    receiver: &mut watch::Receiver<SessionState>,
    predicate: impl FnMut(&SessionState) -> bool,
) -> SessionState {
    timeout(WAIT, receiver.wait_for(predicate))
        .await
        .expect("state reached in time")
        .expect("store alive")
        .clone()
}

async fn resolved(store: &SessionStore) -> SessionState {
    timeout(WAIT, store.wait_resolved()).await.expect("resolved in time")
}

async fn initial_fetch_started(provider: &MockAuthProvider) {
    while provider.current_session_calls() == 0 {
        tokio::task::yield_now().await;
    }
}

fn profile(user_id: &str) -> UserProfile {
    UserProfile {
        user_id: user_id.into(),
        first_name: "Ana".into(),
        last_name: "López".into(),
        email: "ana@example.com".into(),
        role: Role::Farmer,
        department: Department::Boaco,
        sex: None,
        updated_at: Utc::now(),
    }
}

#[tokio::test]
async fn starts_unresolved_then_resolves_anonymous() {
    let provider = Arc::new(MockAuthProvider::new());
    provider.hold_current_session();
    let store = SessionStore::mount(provider.clone());

    assert_eq!(store.state(), SessionState::default());

    provider.release_current_session();
    let state = resolved(&store).await;
    assert!(state.resolved);
    assert_eq!(state.identity, None);
}

#[tokio::test]
async fn picks_up_existing_session() {
    let provider = Arc::new(MockAuthProvider::new().signed_in_as(AuthIdentity::new("u1")));
    let store = SessionStore::mount(provider);

    let state = resolved(&store).await;
    assert_eq!(state.user_id(), Some("u1"));
}

#[tokio::test]
async fn failed_initial_fetch_resolves_anonymous() {
    let provider = Arc::new(MockAuthProvider::new().signed_in_as(AuthIdentity::new("u1")));
    provider.fail_current_session(Some(AuthError::Http("connection refused".into())));
    let store = SessionStore::mount(provider);

    let state = resolved(&store).await;
    assert!(state.resolved);
    assert!(!state.is_authenticated());
}

#[tokio::test]
async fn resolved_never_goes_back_to_false() {
    let provider = Arc::new(MockAuthProvider::new());
    provider.hold_current_session();
    let store = SessionStore::mount(provider.clone());

    let mut receiver = store.subscribe();
    let observer = tokio::spawn(async move {
        let mut seen = vec![receiver.borrow_and_update().resolved];
        while receiver.changed().await.is_ok() {
            seen.push(receiver.borrow_and_update().resolved);
        }
        seen
    });

    initial_fetch_started(&provider).await;
    provider.emit(AuthChange::signed_in(session_for(AuthIdentity::new("u1"))));
    provider.release_current_session();
    provider.emit(AuthChange::signed_out());
    let mut receiver = store.subscribe();
    until(&mut receiver, |state| state.resolved && state.identity.is_none()).await;

    store.shutdown().await;
    let seen = timeout(WAIT, observer).await.expect("observer ends").expect("join");
    let first_true = seen.iter().position(|resolved| *resolved).expect("resolved once");
    assert!(seen[first_true..].iter().all(|resolved| *resolved), "{seen:?}");
}

#[tokio::test]
async fn late_initial_fetch_does_not_override_sign_in_event() {
    let provider = Arc::new(MockAuthProvider::new());
    provider.hold_current_session();
    let store = SessionStore::mount(provider.clone());
    initial_fetch_started(&provider).await;

    provider.emit(AuthChange::signed_in(session_for(AuthIdentity::new("u1"))));
    let mut receiver = store.subscribe();
    let state = until(&mut receiver, |state| state.resolved).await;
    assert_eq!(state.user_id(), Some("u1"));

    // The held fetch answers "no session" from before the event.
    provider.release_current_session();
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(store.state().user_id(), Some("u1"));
}

#[tokio::test]
async fn late_initial_fetch_does_not_override_sign_out_event() {
    let provider = Arc::new(MockAuthProvider::new().signed_in_as(AuthIdentity::new("u1")));
    provider.hold_current_session();
    let store = SessionStore::mount(provider.clone());
    initial_fetch_started(&provider).await;

    provider.emit(AuthChange::signed_out());
    provider.release_current_session();
    let state = resolved(&store).await;
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(state.identity, None);
    assert_eq!(store.state().identity, None);
}

#[tokio::test]
async fn lagged_listener_rereads_current_session() {
    let provider = Arc::new(MockAuthProvider::with_event_capacity(2));
    let store = SessionStore::mount(provider.clone());

    // The listener has not run yet on this runtime, so these overflow its buffer.
    for user in ["u1", "u2", "u3", "u4", "u5"] {
        provider.emit(AuthChange::signed_in(session_for(AuthIdentity::new(user))));
    }

    let mut receiver = store.subscribe();
    let state = until(&mut receiver, |state| state.user_id() == Some("u5")).await;
    assert!(state.resolved);
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(store.state().user_id(), Some("u5"));
    assert_eq!(provider.current_session_calls(), 2);
}

#[tokio::test]
async fn sign_in_stores_identity() {
    let provider = Arc::new(MockAuthProvider::new().with_account("ana@example.com", "s3cret", "u1"));
    let store = SessionStore::mount(provider);
    resolved(&store).await;

    let identity = store
        .sign_in(&Credentials::new("ana@example.com", "s3cret"))
        .await
        .expect("sign in");
    assert_eq!(identity.user_id, "u1");
    assert_eq!(identity.email.as_deref(), Some("ana@example.com"));
    assert_eq!(store.state().user_id(), Some("u1"));
}

#[tokio::test]
async fn failed_sign_in_leaves_state_unchanged() {
    let provider = Arc::new(MockAuthProvider::new().with_account("ana@example.com", "s3cret", "u1"));
    let store = SessionStore::mount(provider);
    let before = resolved(&store).await;

    let error = store
        .sign_in(&Credentials::new("ana@example.com", "wrong"))
        .await
        .unwrap_err();
    assert_eq!(error, AuthError::InvalidCredentials);
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(store.state(), before);
}

#[tokio::test]
async fn sign_in_resolves_an_unresolved_store() {
    let provider = Arc::new(MockAuthProvider::new().with_account("ana@example.com", "s3cret", "u1"));
    provider.hold_current_session();
    let store = SessionStore::mount(provider.clone());

    store
        .sign_in(&Credentials::new("ana@example.com", "s3cret"))
        .await
        .expect("sign in");
    let state = store.state();
    assert!(state.resolved);
    assert_eq!(state.user_id(), Some("u1"));

    provider.release_current_session();
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(store.state().user_id(), Some("u1"));
}

#[tokio::test]
async fn sign_out_failure_keeps_identity() {
    let provider = Arc::new(MockAuthProvider::new().signed_in_as(AuthIdentity::new("u1")));
    let store = SessionStore::mount(provider.clone());
    resolved(&store).await;

    provider.fail_sign_out(Some(AuthError::Http("timeout".into())));
    assert!(store.sign_out().await.is_err());
    assert_eq!(store.state().user_id(), Some("u1"));

    provider.fail_sign_out(None);
    store.sign_out().await.expect("sign out");
    let state = store.state();
    assert_eq!(state.identity, None);
    assert!(state.resolved);
}

#[tokio::test]
async fn profile_follows_identity() {
    let provider = Arc::new(
        MockAuthProvider::new()
            .signed_in_as(AuthIdentity::new("u1"))
            .with_account("b@example.com", "pw1234", "u2"),
    );
    let store = SessionStore::mount(provider.clone());
    resolved(&store).await;

    assert!(!store.attach_profile(profile("someone-else")));
    assert_eq!(store.state().profile, None);

    assert!(store.attach_profile(profile("u1")));
    assert_eq!(store.state().profile.map(|p| p.user_id), Some("u1".to_string()));

    // A different user signing in drops the old profile.
    store
        .sign_in(&Credentials::new("b@example.com", "pw1234"))
        .await
        .expect("sign in");
    assert_eq!(store.state().profile, None);

    assert!(store.attach_profile(profile("u2")));
    store.sign_out().await.expect("sign out");
    assert_eq!(store.state().profile, None);
}

#[tokio::test]
async fn sign_up_with_confirmation_keeps_anonymous() {
    let provider = Arc::new(MockAuthProvider::new().requiring_confirmation());
    let store = SessionStore::mount(provider);
    resolved(&store).await;

    let outcome = store
        .sign_up(&SignUpRequest {
            credentials: Credentials::new("new@example.com", "123456"),
            first_name: "Luis".into(),
            last_name: "Pérez".into(),
            role: Role::Veterinarian,
            department: Department::Leon,
        })
        .await
        .expect("sign up");
    assert!(matches!(outcome, SignUpOutcome::ConfirmationRequired { .. }));
    assert!(!store.state().is_authenticated());
}

#[tokio::test]
async fn sign_up_without_confirmation_signs_in() {
    let provider = Arc::new(MockAuthProvider::new());
    let store = SessionStore::mount(provider);
    resolved(&store).await;

    let outcome = store
        .sign_up(&SignUpRequest {
            credentials: Credentials::new("new@example.com", "123456"),
            first_name: "Luis".into(),
            last_name: "Pérez".into(),
            role: Role::Technician,
            department: Department::Rivas,
        })
        .await
        .expect("sign up");
    let SignUpOutcome::SignedIn(session) = outcome else {
        panic!("expected a session");
    };
    assert_eq!(store.state().user_id(), Some(session.user.user_id.as_str()));
}

#[tokio::test]
async fn never_resolves_while_provider_is_silent() {
    let provider = Arc::new(MockAuthProvider::new());
    provider.hold_current_session();
    let store = SessionStore::mount(provider);

    assert!(
        timeout(Duration::from_millis(50), store.wait_resolved())
            .await
            .is_err()
    );
    assert!(!store.state().resolved);
}

#[tokio::test]
async fn shutdown_stops_listening() {
    let provider = Arc::new(MockAuthProvider::new());
    let store = SessionStore::mount(provider.clone());
    resolved(&store).await;
    let mut receiver = store.subscribe();

    store.shutdown().await;
    provider.emit(AuthChange::signed_in(session_for(AuthIdentity::new("u1"))));

    let changed = timeout(WAIT, receiver.changed()).await.expect("no hang");
    assert!(changed.is_err(), "store closed its channel");
    assert_eq!(receiver.borrow().identity, None);
}
