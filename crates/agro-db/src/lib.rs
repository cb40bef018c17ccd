//! # agro-db
//!
//! libSQL record store for AgroSalud.
//!
//! Holds animals, the four health record tables (vaccinations, medical
//! monitoring, treatments, routine checkups), and user profiles. Every row is
//! owned by the user who created it: [`service::AgroService`] is opened with
//! an identity and stamps and filters `owner_id` from it.
//!
//! Access goes through one trait per entity (see [`repos`]) so callers and
//! tests can substitute in-memory implementations.

pub mod error;
pub mod helpers;
pub mod history;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

pub use history::medical_history;
pub use repos::{AnimalRepo, CheckupRepo, MonitoringRepo, ProfileRepo, TreatmentRepo, VaccinationRepo};
pub use service::AgroService;

/// Database handle: a libSQL database plus its connection.
pub struct AgroDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl AgroDb {
    /// Open a local database file (or `":memory:"`) and run migrations.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        let agro_db = Self { db, conn };
        agro_db.run_migrations().await?;
        Ok(agro_db)
    }

    /// Open a remote libSQL database (`libsql://…`) and run migrations.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;
        let agro_db = Self { db, conn };
        agro_db.run_migrations().await?;
        Ok(agro_db)
    }

    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID, e.g. `"ani-a3f8b2c1"`.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}
