//! # AppError
//!
//! Centralized error handling for the Railpost ecosystem.
//! Every rejection is recoverable at the call site: the store stays usable
//! and no operation applies partially.

use thiserror::Error;

/// The primary error type for all rp-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (e.g., Publication referenced by a stale id)
    #[error("{0} not found with ID {1}")]
    NotFound(String, String),

    /// Validation failure (e.g., blank title, blank comment body)
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Caller is not allowed to perform the operation (author mismatch)
    #[error("unauthorized: {0}")]
    Unauthorized(String),
}

impl AppError {
    /// Shorthand for the common "no publication with this id" case.
    pub fn publication_not_found(id: u64) -> Self {
        AppError::NotFound("Publication".into(), id.to_string())
    }
}

/// A specialized Result type for Railpost logic.
pub type Result<T> = std::result::Result<T, AppError>;
