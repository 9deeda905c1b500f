//! Headless interaction state for the Sneakers storefront.
//!
//! This crate provides the stateful units a presentation layer renders:
//! - `CartStore` - Shared cart handle owned by the app shell
//! - `Gallery` - Selected image with wraparound navigation
//! - `QuantitySelector` - Pending quantity with a floor of one
//! - `ProductPage` - Composes the three above and dispatches add-to-cart
//! - `CartWidget` - Badge plus dropdown/modal state machine with its
//!   document effects (outside-click listener, scroll lock)
//! - `AppShell` - Composition root: routes, navigation drawer, page, widget
//!
//! Everything here is single-threaded. Shared state is `Rc<RefCell<_>>` and
//! document effects are RAII guards, so dropping a widget releases them.

mod document;
mod error;
mod gallery;
mod page;
mod quantity;
mod routes;
mod shell;
mod store;
mod viewport;
mod widget;

pub use document::*;
pub use error::*;
pub use gallery::*;
pub use page::*;
pub use quantity::*;
pub use routes::*;
pub use shell::*;
pub use store::*;
pub use viewport::*;
pub use widget::*;

// Re-export the commerce types that appear in this crate's API
pub use sneaker_commerce::{
    cart::{AddOutcome, Cart, CartPricing, LineItem},
    catalog::{Product, ProductImage},
    CommerceError, Currency, Money,
};
