//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures.
///
/// Missing records are not errors: lookups return `Option` and callers
/// decide how to report the absence.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Human-readable message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            DomainError::Validation(msg) => msg,
        }
    }
}
