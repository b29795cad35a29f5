//! Domain and backend error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Result type returned by division backends and record stores.
pub type BackendResult<T> = Result<T, BackendError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures (validation, invariants).
/// Store availability belongs to [`BackendError`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated. Signals a data-integrity bug upstream.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

/// Failure kinds reported by an account backend.
///
/// Call sites match on the kind: an absent entity is not an outage, and an
/// outage is not a data-integrity bug.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The requested entity does not exist in this backend.
    #[error("not found")]
    NotFound,

    /// The backing store is temporarily unavailable.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// Stored data broke a domain invariant.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl BackendError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Whether retrying later could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, BackendError::Unavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_convert_into_backend_errors() {
        let err: BackendError = DomainError::invariant("debit equals credit").into();
        assert_eq!(
            err,
            BackendError::Domain(DomainError::InvariantViolation("debit equals credit".into()))
        );
        assert!(!err.is_transient());
    }

    #[test]
    fn only_unavailable_is_transient() {
        assert!(BackendError::unavailable("connection reset").is_transient());
        assert!(!BackendError::NotFound.is_transient());
    }
}
