//! Turning a route guard's decision into "go ahead" or a user-facing error.

use agro_auth::{GateDecision, Route, SessionState};

/// `Ok` when `state` may enter `route`.
///
/// Redirects become errors telling the user what to do instead; a store that
/// never resolved is reported as such rather than treated as anonymous.
pub fn admit(route: Route, state: &SessionState) -> anyhow::Result<()> {
    match route.gate().decide(state) {
        GateDecision::Render(()) => Ok(()),
        GateDecision::Redirect(target) if target == Route::LOGIN_REDIRECT => {
            anyhow::bail!("not signed in; run `agrosalud auth login` first")
        }
        GateDecision::Redirect(_) => {
            let who = state.user_id().unwrap_or("another user");
            anyhow::bail!("already signed in as {who}; run `agrosalud auth logout` first")
        }
        GateDecision::Loading => {
            anyhow::bail!("session is still loading; the auth provider has not answered")
        }
    }
}

#[cfg(test)]
mod tests {
    use agro_auth::{Route, SessionState};
    use agro_core::identity::AuthIdentity;

    use super::admit;

    fn signed_in(user_id: &str) -> SessionState {
        SessionState {
            identity: Some(AuthIdentity::new(user_id)),
            profile: None,
            resolved: true,
        }
    }

    fn anonymous() -> SessionState {
        SessionState {
            resolved: true,
            ..SessionState::default()
        }
    }

    #[test]
    fn records_need_a_session() {
        let err = admit(Route::HealthManagement, &anonymous()).expect_err("should redirect");
        assert!(err.to_string().contains("not signed in"));
        assert!(admit(Route::HealthManagement, &signed_in("u1")).is_ok());
    }

    #[test]
    fn login_refuses_a_signed_in_user() {
        let err = admit(Route::Login, &signed_in("u1")).expect_err("should redirect");
        assert!(err.to_string().contains("already signed in as u1"));
        assert!(admit(Route::Login, &anonymous()).is_ok());
        assert!(admit(Route::Register, &anonymous()).is_ok());
    }

    #[test]
    fn unresolved_state_is_never_admitted() {
        let loading = SessionState::default();
        for route in Route::ALL {
            let err = admit(route, &loading).expect_err("loading must not pass");
            assert!(err.to_string().contains("still loading"), "{route}");
        }
    }
}
