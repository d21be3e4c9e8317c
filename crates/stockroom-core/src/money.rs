//! # Money Module
//!
//! Provides the `Money` type used for product prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "12.50" typed in the form ──► 1250 cents ──► price_cents column      │
//! │    1250 cents read back      ──► "12.50" shown in the table             │
//! │                                                                         │
//! │  Prices carry exactly 2 fractional digits, never more.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::Money;
//!
//! let price: Money = "9.99".parse().unwrap();
//! assert_eq!(price.cents(), 999);
//! assert_eq!(price.to_string(), "9.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: parsing accepts a sign so validation can report
///   negative prices precisely instead of as a format error
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).major(), 10);
    /// assert_eq!(Money::from_cents(-550).major(), -5);
    /// ```
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Why a price string could not be read as [`Money`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    #[error("amount is empty")]
    Empty,

    #[error("amount must be digits with an optional '.' separator")]
    InvalidDigits,

    #[error("amount has more than 2 decimal places")]
    TooManyDecimals,

    #[error("amount is too large")]
    Overflow,
}

/// Parses decimal strings such as `"9"`, `"9.9"`, `"9.99"` or `"-0.50"`.
///
/// At most 2 fractional digits are accepted; `"9.999"` is rejected rather
/// than rounded.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        if digits.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let (major, minor) = digits.split_once('.').unwrap_or((digits, ""));

        if major.is_empty() && minor.is_empty() {
            return Err(ParseMoneyError::InvalidDigits);
        }
        if !major.chars().all(|c| c.is_ascii_digit()) || !minor.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ParseMoneyError::InvalidDigits);
        }
        if minor.len() > 2 {
            return Err(ParseMoneyError::TooManyDecimals);
        }

        let major: i64 = if major.is_empty() {
            0
        } else {
            major.parse().map_err(|_| ParseMoneyError::Overflow)?
        };

        // "5" in the tenths place is 50 cents
        let minor: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| ParseMoneyError::InvalidDigits)? * 10,
            _ => minor.parse().map_err(|_| ParseMoneyError::InvalidDigits)?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or(ParseMoneyError::Overflow)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with exactly two decimals and no currency symbol.
///
/// The form prefixes the configured currency symbol when it renders prices.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(1250).to_string(), "12.50");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(-50).to_string(), "-0.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_parse_accepts_common_forms() {
        assert_eq!("9.99".parse::<Money>().unwrap().cents(), 999);
        assert_eq!("12.50".parse::<Money>().unwrap().cents(), 1250);
        assert_eq!("12.5".parse::<Money>().unwrap().cents(), 1250);
        assert_eq!("7".parse::<Money>().unwrap().cents(), 700);
        assert_eq!("7.".parse::<Money>().unwrap().cents(), 700);
        assert_eq!(".75".parse::<Money>().unwrap().cents(), 75);
        assert_eq!(" 19.99 ".parse::<Money>().unwrap().cents(), 1999);
        assert_eq!("-0.50".parse::<Money>().unwrap().cents(), -50);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Money>(), Err(ParseMoneyError::Empty));
        assert_eq!("-".parse::<Money>(), Err(ParseMoneyError::Empty));
        assert_eq!(".".parse::<Money>(), Err(ParseMoneyError::InvalidDigits));
        assert_eq!("abc".parse::<Money>(), Err(ParseMoneyError::InvalidDigits));
        assert_eq!("1,50".parse::<Money>(), Err(ParseMoneyError::InvalidDigits));
        assert_eq!("1.2.3".parse::<Money>(), Err(ParseMoneyError::InvalidDigits));
        assert_eq!("9.999".parse::<Money>(), Err(ParseMoneyError::TooManyDecimals));
        assert_eq!(
            "99999999999999999999".parse::<Money>(),
            Err(ParseMoneyError::Overflow)
        );
    }

    #[test]
    fn test_display_parse_agree() {
        for text in ["0.00", "9.99", "12.50", "1000.01"] {
            assert_eq!(text.parse::<Money>().unwrap().to_string(), text);
        }
    }
}
