//! Database error types for agro-db.

use agro_core::errors::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned unreadable data.
    #[error("Query failed: {0}")]
    Query(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// No row with this id belongs to the signed-in user.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The service was opened without an identity.
    #[error("not signed in; records are only available to an authenticated user")]
    NotAuthenticated,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<CoreError> for DatabaseError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => Self::Validation(message),
            CoreError::NotFound { entity_type, id } => {
                Self::Query(format!("{entity_type} not found: {id}"))
            }
            CoreError::Other(error) => Self::Other(error),
        }
    }
}
