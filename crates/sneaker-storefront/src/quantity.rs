//! Pending quantity selector.

/// Quantity the shopper is about to add; never below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantitySelector {
    value: u32,
}

impl QuantitySelector {
    /// Create a selector at one.
    pub fn new() -> Self {
        Self { value: 1 }
    }

    /// Current quantity.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Increase by one, saturating at `u32::MAX`.
    pub fn increase(&mut self) -> u32 {
        self.value = self.value.saturating_add(1);
        self.value
    }

    /// Decrease by one, stopping at one.
    pub fn decrease(&mut self) -> u32 {
        self.value = self.value.saturating_sub(1).max(1);
        self.value
    }

    /// Back to one after a successful add-to-cart.
    pub fn reset(&mut self) {
        self.value = 1;
    }
}

impl Default for QuantitySelector {
    fn default() -> Self {
        Self::new()
    }
}
