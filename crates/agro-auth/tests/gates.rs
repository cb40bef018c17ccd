//! Route guard decisions over every session phase.

use std::cell::Cell;
use std::sync::Arc;
use std::time::Duration;

use agro_auth::testing::{MockAuthProvider, session_for};
use agro_auth::{AuthChange, Gate, GateDecision, GatePhase, Route, SessionState, SessionStore};
use agro_core::identity::AuthIdentity;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tokio::time::timeout;

fn state(resolved: bool, user: Option<&str>) -> SessionState {
    SessionState {
        identity: user.map(AuthIdentity::new),
        profile: None,
        resolved,
    }
}

#[rstest]
#[case::loading_anonymous(false, None, GatePhase::Loading)]
#[case::loading_with_stale_identity(false, Some("u1"), GatePhase::Loading)]
#[case::anonymous(true, None, GatePhase::Anonymous)]
#[case::authenticated(true, Some("u1"), GatePhase::Authenticated)]
fn phase_from_state(
    #[case] resolved: bool,
    #[case] user: Option<&str>,
    #[case] expected: GatePhase,
) {
    assert_eq!(GatePhase::from(&state(resolved, user)), expected);
}

#[rstest]
#[case::authenticated_only_loading(Gate::AuthenticatedOnly, false, None, GateDecision::Loading)]
#[case::anonymous_only_loading(Gate::AnonymousOnly, false, None, GateDecision::Loading)]
#[case::authenticated_only_loading_with_identity(Gate::AuthenticatedOnly, false, Some("u1"), GateDecision::Loading)]
#[case::anonymous_only_loading_with_identity(Gate::AnonymousOnly, false, Some("u1"), GateDecision::Loading)]
#[case::authenticated_only_anonymous(Gate::AuthenticatedOnly, true, None, GateDecision::Redirect(Route::Login))]
#[case::anonymous_only_anonymous(Gate::AnonymousOnly, true, None, GateDecision::Render(()))]
#[case::authenticated_only_signed_in(Gate::AuthenticatedOnly, true, Some("u1"), GateDecision::Render(()))]
#[case::anonymous_only_signed_in(Gate::AnonymousOnly, true, Some("u1"), GateDecision::Redirect(Route::Home))]
fn gate_decisions(
    #[case] gate: Gate,
    #[case] resolved: bool,
    #[case] user: Option<&str>,
    #[case] expected: GateDecision<()>,
) {
    assert_eq!(gate.decide(&state(resolved, user)), expected);
}

#[test]
fn redirect_targets_are_login_and_home() {
    assert_eq!(Route::Login.path(), "/login");
    assert_eq!(Route::Home.path(), "/");
}

#[rstest]
#[case(Gate::AuthenticatedOnly, false, None)]
#[case(Gate::AuthenticatedOnly, true, None)]
#[case(Gate::AnonymousOnly, true, Some("u1"))]
fn content_is_not_built_unless_rendered(
    #[case] gate: Gate,
    #[case] resolved: bool,
    #[case] user: Option<&str>,
) {
    let built = Cell::new(false);
    let decision = gate.guard(&state(resolved, user), || built.set(true));
    assert!(!matches!(decision, GateDecision::Render(())));
    assert!(!built.get());
}

#[test]
fn rendered_content_is_passed_through() {
    let decision = Gate::AuthenticatedOnly.guard(&state(true, Some("u1")), || "dashboard");
    assert_eq!(decision, GateDecision::Render("dashboard"));
    assert_eq!(decision.map(str::len), GateDecision::Render(9));
}

#[tokio::test]
async fn settle_waits_for_resolution() {
    let provider = Arc::new(MockAuthProvider::new());
    provider.hold_current_session();
    let store = SessionStore::mount(provider.clone());
    let mut receiver = store.subscribe();

    assert!(Gate::AuthenticatedOnly.decide(&store.state()).is_loading());

    provider.release_current_session();
    let decision = timeout(Duration::from_secs(2), Gate::AuthenticatedOnly.settle(&mut receiver))
        .await
        .expect("settles");
    assert_eq!(decision, GateDecision::Redirect(Route::Login));
}

#[tokio::test]
async fn next_re_evaluates_on_store_change() {
    let provider = Arc::new(MockAuthProvider::new());
    let store = SessionStore::mount(provider.clone());
    let mut receiver = store.subscribe();
    let decision = timeout(Duration::from_secs(2), Gate::AnonymousOnly.settle(&mut receiver))
        .await
        .expect("settles");
    assert_eq!(decision, GateDecision::Render(()));

    provider.emit(AuthChange::signed_in(session_for(AuthIdentity::new("u1"))));
    let decision = timeout(Duration::from_secs(2), Gate::AnonymousOnly.next(&mut receiver))
        .await
        .expect("changes");
    assert_eq!(decision, Some(GateDecision::Redirect(Route::Home)));

    store.shutdown().await;
    assert_eq!(Gate::AnonymousOnly.next(&mut receiver).await, None);
}
