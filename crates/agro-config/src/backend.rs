//! Auth backend configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Where the auth provider lives (a GoTrue-compatible REST API).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://abc.supabase.co`. `/auth/v1` is appended.
    #[serde(default)]
    pub url: String,

    /// Public anon key sent as the `apikey` header.
    #[serde(default)]
    pub anon_key: String,
}

impl BackendConfig {
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    /// `Ok(self)` if configured, `NotConfigured` otherwise.
    pub fn require(&self) -> Result<&Self, ConfigError> {
        if self.is_configured() {
            Ok(self)
        } else {
            Err(ConfigError::NotConfigured {
                section: "backend".into(),
            })
        }
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_needs_url_and_key() {
        let mut config = BackendConfig {
            url: "https://farm.example.co/".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
        assert!(config.require().is_err());

        config.anon_key = "anon".into();
        assert!(config.is_configured());
        assert_eq!(config.base_url(), "https://farm.example.co");
    }
}
