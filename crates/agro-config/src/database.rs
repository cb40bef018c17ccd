//! libSQL store configuration.

use serde::{Deserialize, Serialize};

/// Local database file used when no remote URL is set.
pub const DEFAULT_DB_PATH: &str = ".agrosalud/agrosalud.db";

fn default_path() -> String {
    DEFAULT_DB_PATH.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote database URL (e.g., `libsql://farm.turso.io`).
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Remote mode needs both the URL and a token.
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_file() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, ".agrosalud/agrosalud.db");
        assert!(!config.is_remote());
    }
}
