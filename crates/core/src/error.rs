//! Domain error model.

use thiserror::Error;

use crate::id::CustomerId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// uniqueness conflicts, missing records). Transport concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required input was missing or empty.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The request would violate email uniqueness; carries the id of the
    /// record that already holds the email.
    #[error("conflict: {message}")]
    Conflict {
        message: String,
        existing_id: CustomerId,
    },

    /// No record exists for the requested id.
    #[error("customer not found: {requested_id}")]
    NotFound { requested_id: CustomerId },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>, existing_id: CustomerId) -> Self {
        Self::Conflict {
            message: msg.into(),
            existing_id,
        }
    }

    pub fn not_found(requested_id: CustomerId) -> Self {
        Self::NotFound { requested_id }
    }
}
