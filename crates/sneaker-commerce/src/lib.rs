//! Commerce domain types for the Sneakers storefront.
//!
//! This crate provides the pieces of the storefront that know nothing about
//! pages, viewports or widgets:
//!
//! - **Money**: cents-based amounts with a currency
//! - **Cart**: line items keyed by product name, merge-or-append, pricing
//! - **Catalog**: the demo product and its image set
//!
//! # Example
//!
//! ```rust
//! use sneaker_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add_or_merge("Shoe", Money::from_major(125, Currency::USD), 2).unwrap();
//! cart.add_or_merge("Shoe", Money::from_major(125, Currency::USD), 3).unwrap();
//!
//! assert_eq!(cart.line_count(), 1);
//! assert_eq!(cart.total().unwrap().display(), "$625.00");
//! ```

pub mod error;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::CommerceError;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{AddOutcome, Cart, CartPricing, LineItem, LineItemPricing};

    // Catalog
    pub use crate::catalog::{Product, ProductImage};
}
