//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is non-fatal: the caller (usually the view layer) reports it
/// and carries on. Rejected operations never mutate state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed or missing required input (e.g. non-numeric quantity).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The referenced product does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// An adjustment would drive a quantity below zero.
    #[error("quantity cannot be negative: {0}")]
    NegativeQuantity(String),

    /// A transfer's source location is empty.
    #[error("insufficient stock: {0}")]
    InsufficientStock(String),

    /// The persisted slot could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn negative_quantity(msg: impl Into<String>) -> Self {
        Self::NegativeQuantity(msg.into())
    }

    pub fn insufficient_stock(msg: impl Into<String>) -> Self {
        Self::InsufficientStock(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(value: serde_json::Error) -> Self {
        Self::Storage(format!("malformed product list: {value}"))
    }
}
