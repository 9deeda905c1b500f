//! Product and media types.

use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Number of images in the demo product's gallery.
pub const DEMO_IMAGE_COUNT: usize = 4;

/// One image of a product, in full size and as a thumbnail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductImage {
    /// Full-size image path.
    pub src: String,
    /// Thumbnail path.
    pub thumbnail: String,
    /// Alt text.
    pub alt: String,
}

impl ProductImage {
    /// Create an image from its two asset paths.
    pub fn new(src: impl Into<String>, thumbnail: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            thumbnail: thumbnail.into(),
            alt: alt.into(),
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Brand shown above the name.
    pub company: String,
    /// Product name; also the cart line key.
    pub name: String,
    /// Product description.
    pub description: String,
    /// Current selling price.
    pub price: Money,
    /// Price before markdown, if any.
    pub compare_at_price: Option<Money>,
    /// Ordered gallery images.
    pub images: Vec<ProductImage>,
}

impl Product {
    /// The storefront's only product.
    pub fn fall_limited_edition_sneakers() -> Self {
        let images = (1..=DEMO_IMAGE_COUNT)
            .map(|n| {
                ProductImage::new(
                    format!("/images/image-product-{n}.jpg"),
                    format!("/images/image-product-{n}-thumbnail.jpg"),
                    format!("Product view {n}"),
                )
            })
            .collect();

        Self {
            company: "Sneaker Company".to_string(),
            name: "Fall Limited Edition Sneakers".to_string(),
            description: "These low-profile sneakers are your perfect casual wear companion. \
                Featuring a durable rubber outer sole, they'll withstand everything \
                the weather can offer."
                .to_string(),
            price: Money::from_major(125, Currency::USD),
            compare_at_price: Some(Money::from_major(250, Currency::USD)),
            images,
        }
    }

    /// Markdown from the compare-at price, in whole percent.
    ///
    /// `None` when there is no compare-at price or it is not above the
    /// current price.
    pub fn discount_percent(&self) -> Option<u32> {
        let compare = self.compare_at_price?;
        if compare.currency != self.price.currency
            || compare.amount_cents <= self.price.amount_cents
            || compare.amount_cents <= 0
        {
            return None;
        }
        let off = i128::from(compare.amount_cents) - i128::from(self.price.amount_cents);
        u32::try_from(off * 100 / i128::from(compare.amount_cents)).ok()
    }
}
