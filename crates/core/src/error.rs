//! Errors raised by catalog input checks, before anything reaches the store.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Rejected input.
///
/// Every variant is detected locally and deterministically; a request that
/// fails with one of these was never sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Text that does not parse into the expected field (price, category,
    /// filter value), or a required field left blank.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Parsed, but outside the allowed range (e.g. a price of zero).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    #[error("invalid product id: {0}")]
    InvalidId(String),
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
}
