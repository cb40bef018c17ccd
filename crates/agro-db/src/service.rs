//! `AgroService`: the database handle plus the identity that owns its rows.
//!
//! All repo traits are implemented for `AgroService` in `crate::repos`.

use std::path::Path;

use agro_config::DatabaseConfig;
use agro_core::identity::AuthIdentity;

use crate::AgroDb;
use crate::error::DatabaseError;

pub struct AgroService {
    db: AgroDb,
    owner: Option<AuthIdentity>,
}

impl AgroService {
    /// Open the database described by `config`: remote when a URL and token
    /// are set, otherwise the local file (parent directories are created).
    pub async fn open(
        config: &DatabaseConfig,
        owner: Option<AuthIdentity>,
    ) -> Result<Self, DatabaseError> {
        let db = if config.is_remote() {
            tracing::debug!(url = %config.url, "opening remote database");
            AgroDb::open_remote(&config.url, &config.auth_token).await?
        } else {
            if let Some(parent) = Path::new(&config.path).parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent).map_err(|e| {
                    anyhow::anyhow!("failed to create {}: {e}", parent.display())
                })?;
            }
            tracing::debug!(path = %config.path, "opening local database");
            AgroDb::open_local(&config.path).await?
        };
        Ok(Self::from_db(db, owner))
    }

    #[must_use]
    pub const fn from_db(db: AgroDb, owner: Option<AuthIdentity>) -> Self {
        Self { db, owner }
    }

    #[must_use]
    pub const fn db(&self) -> &AgroDb {
        &self.db
    }

    #[must_use]
    pub const fn identity(&self) -> Option<&AuthIdentity> {
        self.owner.as_ref()
    }

    /// The user id every row is stamped and filtered with.
    pub fn owner_id(&self) -> Result<&str, DatabaseError> {
        self.owner
            .as_ref()
            .map(|identity| identity.user_id.as_str())
            .ok_or(DatabaseError::NotAuthenticated)
    }

    /// Run an owner-scoped UPDATE/DELETE; zero affected rows is `NotFound`.
    pub(crate) async fn execute_owned(
        &self,
        sql: &str,
        params: Vec<libsql::Value>,
        entity: &'static str,
        id: &str,
    ) -> Result<(), DatabaseError> {
        let affected = self
            .db
            .conn()
            .execute(sql, libsql::params_from_iter(params))
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound {
                entity,
                id: id.to_string(),
            });
        }
        Ok(())
    }
}
