//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a local, synchronous outcome of a single in-memory step;
/// none of them is retryable and none leaves a partially applied effect.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. negative amount, blank CPF).
    #[error("validation failed: {0}")]
    Validation(String),

    /// No customer is registered for the supplied CPF.
    #[error("customer not found")]
    NotFound,

    /// A customer with the supplied CPF already exists.
    #[error("customer already exists")]
    AlreadyExists,

    /// A withdrawal asked for more than the current balance.
    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: i128, requested: i64 },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn already_exists() -> Self {
        Self::AlreadyExists
    }
}
