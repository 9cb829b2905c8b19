//! Amount type for monetary values
//!
//! Wraps a `rust_decimal::Decimal` so that user-entered values keep their
//! exact decimal precision. Formatting always renders two fractional digits.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A decimal monetary amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Create an amount from whole currency units
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Create an amount from hundredths of a currency unit
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Amount;
    /// assert_eq!(Amount::from_cents(1050).to_string(), "10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// A zero amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The underlying decimal value
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Parse a plain decimal string such as "12", "12.5" or "1250.00"
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AmountParseError::Empty);
        }
        Decimal::from_str(s)
            .map(Self)
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))
    }

    /// Largest amount the input layer accepts (999,999,999,999,999.99)
    pub fn max_entry() -> Self {
        Self::from_cents(99_999_999_999_999_999)
    }

    /// Add two amounts, `None` on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Total of a sequence of amounts, `None` on overflow
    pub fn checked_sum<I: IntoIterator<Item = Self>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |acc, a| acc.checked_add(a))
    }

    /// Render with exactly two fractional digits, rounding half away from zero
    ///
    /// No currency symbol and no thousands separator; the decimal separator is
    /// always a period.
    pub fn to_fixed_2(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        // the scale is at most 2 here but may be lower near Decimal::MAX
        let mut text = rounded.to_string();
        match text.find('.').map(|dot| text.len() - dot - 1) {
            None => text.push_str(".00"),
            Some(1) => text.push('0'),
            Some(_) => {}
        }
        text
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_fixed_2())
    }
}

impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => write!(f, "Amount is empty"),
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
