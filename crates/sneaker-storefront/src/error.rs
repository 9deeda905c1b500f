//! Storefront error types.

use sneaker_commerce::CommerceError;
use thiserror::Error;

/// Errors surfaced by storefront operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    /// The cart rejected an operation.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// No route matches the path.
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}

/// Result type for storefront operations.
pub type StorefrontResult<T> = Result<T, StorefrontError>;
