//! Product page: gallery, quantity and add-to-cart.

use std::rc::Rc;

use serde::Serialize;
use sneaker_commerce::cart::AddOutcome;
use sneaker_commerce::catalog::{Product, ProductImage};
use tracing::debug;

use crate::error::StorefrontResult;
use crate::gallery::Gallery;
use crate::quantity::QuantitySelector;
use crate::store::CartStore;

/// A mounted product page.
///
/// Gallery and quantity live as long as the page; the cart outlives it.
#[derive(Debug)]
pub struct ProductPage {
    product: Rc<Product>,
    gallery: Gallery,
    quantity: QuantitySelector,
    cart: CartStore,
}

impl ProductPage {
    /// Mount the page for `product`, writing into `cart`.
    ///
    /// Returns `None` if the product has no images to show.
    pub fn mount(product: Rc<Product>, cart: CartStore) -> Option<Self> {
        let gallery = Gallery::for_images(product.images.len())?;
        Some(Self {
            product,
            gallery,
            quantity: QuantitySelector::new(),
            cart,
        })
    }

    /// The product shown.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Gallery state shared by the carousel and the thumbnails.
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Quantity the next add-to-cart will use.
    pub fn quantity(&self) -> u32 {
        self.quantity.value()
    }

    /// Plus button.
    pub fn increase_quantity(&mut self) -> u32 {
        self.quantity.increase()
    }

    /// Minus button; stops at one.
    pub fn decrease_quantity(&mut self) -> u32 {
        self.quantity.decrease()
    }

    /// Next arrow; returns the new index.
    pub fn next_image(&mut self) -> usize {
        self.gallery.next()
    }

    /// Previous arrow; returns the new index.
    pub fn previous_image(&mut self) -> usize {
        self.gallery.previous()
    }

    /// Select an image from a dot or thumbnail.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid image position.
    pub fn select_image(&mut self, index: usize) {
        self.gallery.select_at(index);
    }

    /// The image currently shown.
    pub fn current_image(&self) -> &ProductImage {
        // Gallery length equals the image count and its index is always in range.
        &self.product.images[self.gallery.index()]
    }

    /// Put the pending quantity of this product in the cart.
    ///
    /// The pending quantity goes back to one only when the cart accepted
    /// the item.
    pub fn add_to_cart(&mut self) -> StorefrontResult<AddOutcome> {
        let quantity = self.quantity.value();
        let outcome = self
            .cart
            .add_or_merge(self.product.name.clone(), self.product.price, quantity)?;
        debug!(product = %self.product.name, quantity, ?outcome, "added to cart");
        self.quantity.reset();
        Ok(outcome)
    }

    /// Everything the presentation layer needs to draw the page.
    pub fn view(&self) -> ProductPageView {
        let product = &self.product;
        ProductPageView {
            company: product.company.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.display(),
            compare_at_price: product.compare_at_price.map(|p| p.display()),
            discount_badge: product.discount_percent().map(|p| format!("{p}%")),
            image: self.current_image().clone(),
            image_index: self.gallery.index(),
            carousel_dots: (0..self.gallery.len())
                .map(|i| self.gallery.is_selected(i))
                .collect(),
            thumbnails: product
                .images
                .iter()
                .enumerate()
                .map(|(i, image)| ThumbnailView {
                    src: image.thumbnail.clone(),
                    alt: image.alt.clone(),
                    selected: self.gallery.is_selected(i),
                })
                .collect(),
            quantity: self.quantity.value(),
        }
    }
}

/// Render model of the product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductPageView {
    pub company: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub compare_at_price: Option<String>,
    pub discount_badge: Option<String>,
    /// Large image shared by the carousel and the expanded gallery.
    pub image: ProductImage,
    pub image_index: usize,
    /// One flag per carousel dot; `true` marks the selected image.
    pub carousel_dots: Vec<bool>,
    pub thumbnails: Vec<ThumbnailView>,
    pub quantity: u32,
}

/// One clickable thumbnail in the expanded gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThumbnailView {
    pub src: String,
    pub alt: String,
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sneaker_commerce::{CommerceError, Currency, Money};

    use crate::error::StorefrontError;

    fn mount() -> (ProductPage, CartStore) {
        let cart = CartStore::new();
        let product = Rc::new(Product::fall_limited_edition_sneakers());
        let page = ProductPage::mount(product, cart.clone()).unwrap();
        (page, cart)
    }

    #[test]
    fn test_mount_defaults() {
        let (page, _) = mount();
        assert_eq!(page.quantity(), 1);
        assert_eq!(page.gallery().index(), 0);
        assert_eq!(page.current_image().src, "/images/image-product-1.jpg");
    }

    #[test]
    fn test_mount_without_images() {
        let mut product = Product::fall_limited_edition_sneakers();
        product.images.clear();
        assert!(ProductPage::mount(Rc::new(product), CartStore::new()).is_none());
    }

    #[test]
    fn test_add_to_cart_merges_and_resets_quantity() {
        let (mut page, cart) = mount();
        page.increase_quantity();
        page.increase_quantity();
        assert_eq!(
            page.add_to_cart().unwrap(),
            AddOutcome::Appended { index: 0 }
        );
        assert_eq!(page.quantity(), 1);

        page.increase_quantity();
        assert_eq!(
            page.add_to_cart().unwrap(),
            AddOutcome::Merged { index: 0, quantity: 5 }
        );
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 5);
        assert_eq!(
            cart.calculate_pricing().unwrap().grand_total,
            Money::from_major(625, Currency::USD)
        );
    }

    #[test]
    fn test_failed_add_keeps_quantity() {
        let cart = CartStore::new();
        let mut product = Product::fall_limited_edition_sneakers();
        product.price = Money::from_major(125, Currency::EUR);
        let mut page = ProductPage::mount(Rc::new(product), cart.clone()).unwrap();
        page.increase_quantity();

        let err = page.add_to_cart().unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::Commerce(CommerceError::CurrencyMismatch { .. })
        ));
        assert_eq!(page.quantity(), 2);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_both_gallery_surfaces_share_selection() {
        let (mut page, _) = mount();
        page.select_image(2);
        let view = page.view();
        assert_eq!(view.image_index, 2);
        assert_eq!(view.carousel_dots, vec![false, false, true, false]);
        let selected: Vec<bool> = view.thumbnails.iter().map(|t| t.selected).collect();
        assert_eq!(selected, view.carousel_dots);

        page.previous_image();
        page.previous_image();
        page.previous_image();
        assert_eq!(page.view().image.src, "/images/image-product-4.jpg");
    }

    #[test]
    fn test_view_prices() {
        let (page, _) = mount();
        let view = page.view();
        assert_eq!(view.company, "Sneaker Company");
        assert_eq!(view.price, "$125.00");
        assert_eq!(view.compare_at_price.as_deref(), Some("$250.00"));
        assert_eq!(view.discount_badge.as_deref(), Some("50%"));
        assert_eq!(view.quantity, 1);
    }
}
