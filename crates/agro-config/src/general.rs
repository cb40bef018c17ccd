//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_limit() -> u32 {
    20
}

const fn default_session_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// How long a command waits for the session to resolve before giving up.
    #[serde(default = "default_session_timeout_secs")]
    pub session_timeout_secs: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            session_timeout_secs: default_session_timeout_secs(),
        }
    }
}
