//! # agro-config
//!
//! Layered configuration loading for AgroSalud using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`AGROSALUD_*` prefix, `__` as separator)
//! 2. Project-level `.agrosalud/config.toml`
//! 3. User-level `~/.config/agrosalud/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `AGROSALUD_BACKEND__URL` -> `backend.url`,
//! `AGROSALUD_DATABASE__AUTH_TOKEN` -> `database.auth_token`, etc.
//!
//! ```no_run
//! use agro_config::AgroConfig;
//!
//! let config = AgroConfig::load_with_dotenv().expect("config");
//! if config.backend.is_configured() {
//!     println!("Auth backend: {}", config.backend.url);
//! }
//! ```

mod backend;
mod database;
mod error;
mod general;

pub use backend::BackendConfig;
pub use database::{DEFAULT_DB_PATH, DatabaseConfig};
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "AGROSALUD_";

/// Project-local state directory, relative to the working directory.
pub const PROJECT_DIR: &str = ".agrosalud";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AgroConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl AgroConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; see [`Self::load_with_dotenv`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load `.env` from the working directory (if any), then [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// The provider chain rooted at the current directory.
    pub fn figment() -> Figment {
        Self::figment_in(Path::new("."))
    }

    /// The provider chain with the project config looked up under `root`.
    pub fn figment_in(root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = root.join(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject configurations that cannot be used at all.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.general.session_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.session_timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if !self.database.url.is_empty() && self.database.auth_token.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.auth_token".into(),
                reason: "required when database.url is set".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("agrosalud").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_local_and_unconfigured() {
        let config = AgroConfig::default();
        assert!(!config.backend.is_configured());
        assert!(!config.database.is_remote());
        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.general.session_timeout_secs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_limit_is_rejected() {
        let mut config = AgroConfig::default();
        config.general.default_limit = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn remote_url_requires_token() {
        let mut config = AgroConfig::default();
        config.database.url = "libsql://farm.turso.io".into();
        assert!(config.validate().is_err());
        config.database.auth_token = "tok".into();
        assert!(config.validate().is_ok());
    }
}
