//! Product catalog.
//!
//! The storefront sells a single product; its data lives here so the page
//! and the terminal front end read the same values.

mod product;

pub use product::{Product, ProductImage, DEMO_IMAGE_COUNT};
