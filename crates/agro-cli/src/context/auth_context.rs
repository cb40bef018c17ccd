use std::sync::Arc;
use std::time::Duration;

use agro_auth::{AuthProvider, RestAuthProvider, Route, SessionState, SessionStore, TokenStore};
use agro_config::AgroConfig;
use anyhow::Context;

use super::guard::admit;

/// The mounted session store plus what the auth commands need around it.
pub struct AuthContext {
    store: SessionStore,
    tokens: Option<TokenStore>,
    timeout: Duration,
}

impl AuthContext {
    /// Mount the session store against the configured REST auth provider,
    /// with the session persisted in the OS keychain or the session file.
    pub fn mount(config: &AgroConfig) -> anyhow::Result<Self> {
        let backend = config.backend.require().context(
            "auth backend not configured; set AGROSALUD_BACKEND__URL and AGROSALUD_BACKEND__ANON_KEY",
        )?;
        let tokens = TokenStore::default_location()?;
        let provider = RestAuthProvider::new(backend.base_url(), backend.anon_key.clone())
            .with_token_store(tokens.clone());
        Ok(Self::with_provider(
            Arc::new(provider),
            Some(tokens),
            Duration::from_secs(config.general.session_timeout_secs),
        ))
    }

    #[must_use]
    pub fn with_provider(
        provider: Arc<dyn AuthProvider>,
        tokens: Option<TokenStore>,
        timeout: Duration,
    ) -> Self {
        Self {
            store: SessionStore::mount(provider),
            tokens,
            timeout,
        }
    }

    pub const fn store(&self) -> &SessionStore {
        &self.store
    }

    pub const fn tokens(&self) -> Option<&TokenStore> {
        self.tokens.as_ref()
    }

    /// Wait for the store to resolve, bounded by the configured timeout.
    pub async fn resolved(&self) -> anyhow::Result<SessionState> {
        tokio::time::timeout(self.timeout, self.store.wait_resolved())
            .await
            .map_err(|_| {
                anyhow::anyhow!(
                    "timed out after {}s waiting for the auth provider",
                    self.timeout.as_secs()
                )
            })
    }

    /// Resolve, then pass `route`'s guard.
    pub async fn enter(&self, route: Route) -> anyhow::Result<SessionState> {
        let state = self.resolved().await?;
        tracing::debug!(%route, authenticated = state.is_authenticated(), "entering route");
        admit(route, &state)?;
        Ok(state)
    }

    pub async fn shutdown(self) {
        self.store.shutdown().await;
    }
}
