//! Cross-cutting error types for AgroSalud.
//!
//! Domain-specific errors (`AuthError`, `DatabaseError`) live in their own
//! crates. Everything converges into `anyhow` at the CLI boundary.

use thiserror::Error;

/// Errors that can be raised by any AgroSalud crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Input failed validation (required field, range, ordering).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
