//! Cart and line item types.

use crate::cart::{CartPricing, LineItemPricing};
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A shopping cart.
///
/// Line items are keyed by product name: at most one line exists per
/// distinct name, and lines keep the order in which they were first added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Items in the cart.
    items: Vec<LineItem>,
    /// Cart currency.
    currency: Currency,
}

/// What `Cart::add_or_merge` did with the incoming item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was pushed at `index`.
    Appended { index: usize },
    /// The line at `index` already existed; its quantity is now `quantity`.
    Merged { index: usize, quantity: u32 },
}

impl AddOutcome {
    /// Position of the affected line.
    pub fn index(&self) -> usize {
        match self {
            AddOutcome::Appended { index } | AddOutcome::Merged { index, .. } => *index,
        }
    }
}

impl Cart {
    /// Create an empty cart in the default currency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart in the given currency.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add an item to the cart, merging by name.
    ///
    /// If a line with exactly this name exists, its quantity grows by
    /// `quantity` and its price is left alone. Otherwise a new line is
    /// appended at the end.
    ///
    /// Returns an error, leaving the cart untouched, if:
    /// - The name is empty
    /// - Quantity is zero
    /// - The price is negative or in another currency
    /// - The merged quantity would overflow
    pub fn add_or_merge(
        &mut self,
        name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> Result<AddOutcome, CommerceError> {
        let name = name.into();
        if let Err(e) = self.validate(&name, &unit_price, quantity) {
            warn!(name = %name, error = %e, "rejected cart item");
            return Err(e);
        }

        if let Some((index, existing)) = self
            .items
            .iter_mut()
            .enumerate()
            .find(|(_, item)| item.name == name)
        {
            existing.quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            debug!(name = %existing.name, quantity = existing.quantity, "merged cart line");
            return Ok(AddOutcome::Merged {
                index,
                quantity: existing.quantity,
            });
        }

        let index = self.items.len();
        debug!(name = %name, quantity, "appended cart line");
        self.items.push(LineItem {
            name,
            unit_price,
            quantity,
        });
        Ok(AddOutcome::Appended { index })
    }

    fn validate(&self, name: &str, unit_price: &Money, quantity: u32) -> Result<(), CommerceError> {
        if name.is_empty() {
            return Err(CommerceError::ValidationError(
                "product name must not be empty".to_string(),
            ));
        }
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if unit_price.is_negative() {
            return Err(CommerceError::InvalidPrice(unit_price.amount_cents));
        }
        if unit_price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: unit_price.currency.code().to_string(),
            });
        }
        Ok(())
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Get an item by name.
    pub fn get_item(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Get number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `unit_price * quantity` over every line, computed now.
    pub fn total(&self) -> Result<Money, CommerceError> {
        Ok(self.calculate_pricing()?.grand_total)
    }

    /// Calculate cart pricing.
    ///
    /// Returns error if arithmetic overflow occurs.
    pub fn calculate_pricing(&self) -> Result<CartPricing, CommerceError> {
        let line_items = self
            .items
            .iter()
            .map(|item| {
                Ok(LineItemPricing {
                    name: item.name.clone(),
                    unit_price: item.unit_price,
                    quantity: item.quantity,
                    subtotal: item.subtotal()?,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        let grand_total = Money::try_sum(line_items.iter().map(|l| &l.subtotal), self.currency)
            .ok_or(CommerceError::Overflow)?;

        Ok(CartPricing {
            line_items,
            item_count: self.item_count(),
            grand_total,
        })
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product name; the identity key of the line.
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity, always at least one.
    pub quantity: u32,
}

impl LineItem {
    /// `unit_price * quantity`.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .try_multiply(i64::from(self.quantity))
            .ok_or(CommerceError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(units: i64) -> Money {
        Money::from_major(units, Currency::USD)
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.currency(), Currency::USD);
        assert_eq!(cart.total().unwrap(), Money::zero(Currency::USD));
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        let outcome = cart.add_or_merge("Shoe", usd(125), 2).unwrap();

        assert_eq!(outcome, AddOutcome::Appended { index: 0 });
        assert_eq!(
            cart.items(),
            &[LineItem {
                name: "Shoe".to_string(),
                unit_price: usd(125),
                quantity: 2,
            }]
        );
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new();
        cart.add_or_merge("Shoe", usd(125), 2).unwrap();
        let outcome = cart.add_or_merge("Shoe", usd(125), 3).unwrap();

        assert_eq!(outcome, AddOutcome::Merged { index: 0, quantity: 5 });
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total().unwrap(), usd(625));
    }

    #[test]
    fn test_merge_keeps_existing_price() {
        let mut cart = Cart::new();
        cart.add_or_merge("Shoe", usd(125), 1).unwrap();
        cart.add_or_merge("Shoe", usd(99), 1).unwrap();

        let line = cart.get_item("Shoe").unwrap();
        assert_eq!(line.unit_price, usd(125));
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_merge_is_case_sensitive() {
        let mut cart = Cart::new();
        cart.add_or_merge("Shoe", usd(125), 1).unwrap();
        let outcome = cart.add_or_merge("shoe", usd(125), 1).unwrap();

        assert_eq!(outcome, AddOutcome::Appended { index: 1 });
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_new_names_append_in_order() {
        let mut cart = Cart::new();
        cart.add_or_merge("A", usd(10), 1).unwrap();
        cart.add_or_merge("B", usd(20), 2).unwrap();
        cart.add_or_merge("A", usd(10), 4).unwrap();
        cart.add_or_merge("C", usd(30), 3).unwrap();

        let names: Vec<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(cart.get_item("A").unwrap().quantity, 5);
        assert_eq!(cart.get_item("B").unwrap().quantity, 2);
        assert_eq!(cart.get_item("C").unwrap().quantity, 3);
    }

    #[test]
    fn test_pricing() {
        let mut cart = Cart::new();
        cart.add_or_merge("Product A", Money::new(1000, Currency::USD), 2)
            .unwrap();
        cart.add_or_merge("Product B", Money::new(2000, Currency::USD), 1)
            .unwrap();

        let pricing = cart.calculate_pricing().unwrap();
        assert_eq!(pricing.grand_total.amount_cents, 4000); // 2*1000 + 1*2000
        assert_eq!(pricing.item_count, 3);
        assert_eq!(pricing.line_items[0].subtotal.amount_cents, 2000);
        assert_eq!(pricing.line_items[1].subtotal.amount_cents, 2000);
    }

    #[test]
    fn test_invalid_quantity() {
        let mut cart = Cart::new();
        let result = cart.add_or_merge("Shoe", usd(125), 0);
        assert_eq!(result, Err(CommerceError::InvalidQuantity(0)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_invalid_input_leaves_cart_untouched() {
        let mut cart = Cart::new();
        cart.add_or_merge("Shoe", usd(125), 1).unwrap();
        let before = cart.clone();

        assert!(matches!(
            cart.add_or_merge("", usd(125), 1),
            Err(CommerceError::ValidationError(_))
        ));
        assert_eq!(
            cart.add_or_merge("Shoe", Money::new(-1, Currency::USD), 1),
            Err(CommerceError::InvalidPrice(-1))
        );
        assert!(matches!(
            cart.add_or_merge("Shoe", Money::from_major(125, Currency::EUR), 1),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_whitespace_name_is_a_distinct_line() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.add_or_merge("  ", usd(1), 1),
            Ok(AddOutcome::Appended { index: 0 })
        );
        assert_eq!(
            cart.add_or_merge(" ", usd(1), 1),
            Ok(AddOutcome::Appended { index: 1 })
        );
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_zero_price_is_allowed() {
        let mut cart = Cart::new();
        cart.add_or_merge("Sticker", Money::zero(Currency::USD), 3)
            .unwrap();
        assert_eq!(cart.total().unwrap(), Money::zero(Currency::USD));
    }

    #[test]
    fn test_quantity_overflow() {
        let mut cart = Cart::new();
        cart.add_or_merge("Shoe", usd(1), u32::MAX).unwrap();
        let result = cart.add_or_merge("Shoe", usd(1), 1);
        assert_eq!(result, Err(CommerceError::Overflow));
        assert_eq!(cart.get_item("Shoe").unwrap().quantity, u32::MAX);
    }
}
