//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in cart and money operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Quantity below one.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Negative unit price.
    #[error("Invalid price: {0} cents")]
    InvalidPrice(i64),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in cart calculation")]
    Overflow,

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}
