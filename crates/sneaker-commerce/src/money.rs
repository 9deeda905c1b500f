//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::USD | Currency::EUR => 2,
        }
    }

    fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from whole currency units.
    ///
    /// ```
    /// use sneaker_commerce::money::{Money, Currency};
    /// let price = Money::from_major(125, Currency::USD);
    /// assert_eq!(price.amount_cents, 12500);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the amount in minor units does not fit in an `i64`. Use
    /// [`Money::try_from_major`] for amounts that are not known constants.
    pub fn from_major(units: i64, currency: Currency) -> Self {
        Self::try_from_major(units, currency)
            .unwrap_or_else(|| panic!("{units} {currency} overflows the minor-unit amount"))
    }

    /// Create a Money value from whole currency units, returning None on
    /// overflow.
    pub fn try_from_major(units: i64, currency: Currency) -> Option<Self> {
        units
            .checked_mul(currency.minor_per_major())
            .map(|amount| Self::new(amount, currency))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    ///
    /// Formatting is done on the integer amount so large totals never pick up
    /// floating-point noise.
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        let divisor = self.currency.minor_per_major();
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let major = abs / divisor as u64;
        if places == 0 {
            return format!("{sign}{major}");
        }
        let minor = abs % divisor as u64;
        format!("{sign}{major}.{minor:0places$}")
    }

    /// Try to add another Money value, returning None if currencies don't
    /// match or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values, returning None on currency mismatch
    /// or overflow.
    pub fn try_sum<'a>(
        mut iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_major() {
        let m = Money::from_major(125, Currency::USD);
        assert_eq!(m.amount_cents, 12500);

        let m = Money::from_major(-3, Currency::EUR);
        assert_eq!(m.amount_cents, -300);
    }

    #[test]
    fn test_try_from_major_overflow() {
        assert_eq!(Money::try_from_major(i64::MAX / 10, Currency::USD), None);
        assert_eq!(
            Money::try_from_major(250, Currency::USD),
            Some(Money::new(25000, Currency::USD))
        );
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn test_from_major_panics_on_overflow() {
        Money::from_major(i64::MAX / 10, Currency::USD);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::new(12500, Currency::USD).display(), "$125.00");
        assert_eq!(Money::new(5, Currency::USD).display(), "$0.05");
        assert_eq!(Money::new(-250, Currency::USD).display(), "$-2.50");
        assert_eq!(Money::new(1999, Currency::EUR).display(), "\u{20ac}19.99");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(1000, Currency::USD);
        let b = Money::new(500, Currency::USD);
        assert_eq!(a.try_add(&b), Some(Money::new(1500, Currency::USD)));
    }

    #[test]
    fn test_try_add_rejects_mixed_currency() {
        let usd = Money::new(1000, Currency::USD);
        let eur = Money::new(1000, Currency::EUR);
        assert_eq!(usd.try_add(&eur), None);
    }

    #[test]
    fn test_try_multiply_overflow() {
        let m = Money::new(i64::MAX / 2 + 1, Currency::USD);
        assert_eq!(m.try_multiply(2), None);
        assert_eq!(
            Money::new(12500, Currency::USD).try_multiply(5),
            Some(Money::new(62500, Currency::USD))
        );
    }

    #[test]
    fn test_try_sum() {
        let values = [
            Money::new(100, Currency::USD),
            Money::new(250, Currency::USD),
        ];
        assert_eq!(
            Money::try_sum(values.iter(), Currency::USD),
            Some(Money::new(350, Currency::USD))
        );
        assert_eq!(
            Money::try_sum(std::iter::empty(), Currency::USD),
            Some(Money::zero(Currency::USD))
        );
    }
}
