//! Shared cart handle.

use std::cell::RefCell;
use std::rc::Rc;

use sneaker_commerce::cart::{AddOutcome, Cart, CartPricing};
use sneaker_commerce::{CommerceError, Currency, Money};

/// Handle to the session's cart.
///
/// Created once by the composition root and cloned into the product page
/// and the cart widget, so both observe the same cart. Cloning shares the
/// cart; it never copies it. A mutation is visible to every clone as soon
/// as the call returns.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    inner: Rc<RefCell<Cart>>,
}

impl CartStore {
    /// Create a store holding an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding an empty cart priced in `currency`.
    pub fn with_currency(currency: Currency) -> Self {
        Self::from_cart(Cart::with_currency(currency))
    }

    /// Create a store around an existing cart.
    pub fn from_cart(cart: Cart) -> Self {
        Self {
            inner: Rc::new(RefCell::new(cart)),
        }
    }

    /// Add or merge an item by name. See [`Cart::add_or_merge`].
    pub fn add_or_merge(
        &self,
        name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> Result<AddOutcome, CommerceError> {
        self.inner
            .borrow_mut()
            .add_or_merge(name, unit_price, quantity)
    }

    /// Run `f` against the current cart.
    pub fn with<R>(&self, f: impl FnOnce(&Cart) -> R) -> R {
        f(&self.inner.borrow())
    }

    /// Copy of the current cart.
    pub fn snapshot(&self) -> Cart {
        self.inner.borrow().clone()
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> u64 {
        self.with(Cart::item_count)
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.with(Cart::line_count)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.with(Cart::is_empty)
    }

    /// Pricing computed from the cart as it is now.
    pub fn calculate_pricing(&self) -> Result<CartPricing, CommerceError> {
        self.with(Cart::calculate_pricing)
    }

    /// Check whether two handles share one cart.
    pub fn same_cart(&self, other: &CartStore) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
