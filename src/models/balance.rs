//! Balance type for representing owed amounts
//!
//! Stores whole currency units as a signed i64. Bill splitting in this app
//! is whole-unit arithmetic only, so there is no fractional part to track.
//! Positive means the friend owes the user, negative means the user owes
//! the friend.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A signed amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balance(i64);

impl Balance {
    /// Create a Balance from whole currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units)
    }

    /// Create a zero Balance
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole units
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a balance from a string of digits, with an optional leading sign
    pub fn parse(s: &str) -> Result<Self, BalanceParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(BalanceParseError::Empty);
        }
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| BalanceParseError::InvalidFormat(s.to_string()))
    }

    /// Format with a currency symbol, e.g. `7€` or `-7€`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{}", self.0, symbol)
    }
}

impl Default for Balance {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Arithmetic saturates at the i64 bounds rather than overflowing
impl Add for Balance {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Balance {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Balance {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Balance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Balance::zero(), |acc, b| acc + b)
    }
}

/// Error type for balance parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for BalanceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceParseError::Empty => write!(f, "Empty amount"),
            BalanceParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for BalanceParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let b = Balance::from_units(20);
        assert_eq!(b.units(), 20);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Balance::from_units(20)), "20");
        assert_eq!(format!("{}", Balance::from_units(-7)), "-7");
        assert_eq!(format!("{}", Balance::zero()), "0");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Balance::from_units(20).format_with_symbol("€"), "20€");
        assert_eq!(Balance::from_units(-7).format_with_symbol("€"), "-7€");
    }

    #[test]
    fn test_arithmetic() {
        let a = Balance::from_units(100);
        let b = Balance::from_units(40);

        assert_eq!((a + b).units(), 140);
        assert_eq!((a - b).units(), 60);
        assert_eq!((-b).units(), -40);

        let mut c = Balance::from_units(-7);
        c += Balance::from_units(10);
        assert_eq!(c.units(), 3);
    }

    #[test]
    fn test_arithmetic_saturates_at_bounds() {
        let max = Balance::from_units(i64::MAX);
        let min = Balance::from_units(i64::MIN);

        assert_eq!((max + Balance::from_units(1)).units(), i64::MAX);
        assert_eq!((min - Balance::from_units(1)).units(), i64::MIN);
        assert_eq!((-min).units(), i64::MAX);

        let mut b = max;
        b += Balance::from_units(10);
        assert_eq!(b.units(), i64::MAX);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Balance::parse("40").unwrap().units(), 40);
        assert_eq!(Balance::parse("-7").unwrap().units(), -7);
        assert_eq!(Balance::parse(" 100 ").unwrap().units(), 100);
        assert_eq!(Balance::parse(""), Err(BalanceParseError::Empty));
        assert!(matches!(
            Balance::parse("10.50"),
            Err(BalanceParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_is_checks() {
        assert!(Balance::zero().is_zero());
        assert!(Balance::from_units(20).is_positive());
        assert!(Balance::from_units(-7).is_negative());
        assert_eq!(Balance::from_units(-7).abs().units(), 7);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Balance::from_units(-7),
            Balance::from_units(20),
            Balance::from_units(0),
        ];
        let total: Balance = amounts.into_iter().sum();
        assert_eq!(total.units(), 13);
    }
}
