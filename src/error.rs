//! Crate error types
//!
//! Every operation either succeeds deterministically or reports one of these.

use thiserror::Error;

/// FitLife error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Lookup by id failed. Surfaced instead of silently ignoring the id.
    #[error("{entity} not found with id: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// A meal entry referenced a portion key the food does not define.
    #[error("unknown portion \"{portion}\" for food \"{food}\"")]
    UnknownPortion { food: String, portion: String },

    /// Input rejected before any mutation took place.
    #[error("{0}")]
    Validation(String),
}

impl Error {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Error::NotFound { entity, id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}

/// Result type for FitLife operations
pub type Result<T> = std::result::Result<T, Error>;
