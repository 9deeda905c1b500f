//! Shopping cart module.
//!
//! Contains the cart, its line items and pricing.

mod cart;
mod pricing;

pub use cart::{AddOutcome, Cart, LineItem};
pub use pricing::{CartPricing, LineItemPricing};
