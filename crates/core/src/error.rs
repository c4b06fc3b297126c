//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures. Infrastructure
/// concerns (database errors, IO) belong to the store layer and are never
/// folded into these variants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field failed validation (e.g. empty name, negative quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A mutation targeted a name that is already taken.
    #[error("item already exists")]
    AlreadyExists,

    /// A mutation or lookup targeted an absent item.
    #[error("item not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn already_exists() -> Self {
        Self::AlreadyExists
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
