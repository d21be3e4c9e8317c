//! # Validation Module
//!
//! Turns raw entry text into typed values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form command (desktop app)                                   │
//! │  └── THIS MODULE: required fields, number formats, ranges              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Database (SQLite)                                            │
//! │  └── NOT NULL constraints                                              │
//! │                                                                         │
//! │  Nothing reaches the store unless every entry passes Layer 1.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{parse_price, parse_stock};
//!
//! assert_eq!(parse_price("12.50").unwrap().cents(), 1250);
//! assert_eq!(parse_stock("5").unwrap(), 5);
//! assert!(parse_stock("five").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::{Money, ParseMoneyError};
use crate::MAX_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Presence
// =============================================================================

/// Rejects an entry that is empty or whitespace-only.
///
/// Returns the trimmed value on success.
pub fn require<'a>(field: &str, value: &'a str) -> ValidationResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(value)
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most [`MAX_NAME_LEN`] characters
/// - Duplicates are allowed; names are not unique
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    let name = require("name", name)?;

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

/// Validates a search term typed into the name entry.
///
/// Must not be empty; an empty search is refused, not treated as "all".
/// Any length is accepted, a term longer than every name simply matches nothing.
pub fn validate_search_term(term: &str) -> ValidationResult<String> {
    require("search term", term).map(str::to_string)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a price entry.
///
/// ## Rules
/// - Decimal with at most 2 fractional digits (`"9"`, `"9.9"`, `"9.99"`)
/// - Must be non-negative; zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::parse_price;
///
/// assert!(parse_price("19.99").is_ok());
/// assert!(parse_price("0").is_ok());
/// assert!(parse_price("-1").is_err());
/// assert!(parse_price("1.999").is_err());
/// ```
pub fn parse_price(value: &str) -> ValidationResult<Money> {
    let value = require("price", value)?;

    let price: Money = value
        .parse()
        .map_err(|e: ParseMoneyError| ValidationError::invalid_format("price", e.to_string()))?;

    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(price)
}

/// Parses a stock entry.
///
/// ## Rules
/// - Whole number
/// - Must be non-negative
pub fn parse_stock(value: &str) -> ValidationResult<i64> {
    let value = require("stock", value)?;

    let stock: i64 = value
        .parse()
        .map_err(|_| ValidationError::invalid_format("stock", "must be a whole number"))?;

    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(stock)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert_eq!(require("name", "  Widget ").unwrap(), "Widget");
        assert_eq!(
            require("name", "   ").unwrap_err(),
            ValidationError::required("name")
        );
        assert!(require("name", "").is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert_eq!(validate_product_name("Widget").unwrap(), "Widget");
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(MAX_NAME_LEN)).is_ok());
        assert!(matches!(
            validate_product_name(&"A".repeat(MAX_NAME_LEN + 1)),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_validate_search_term() {
        assert_eq!(validate_search_term(" Widg ").unwrap(), "Widg");
        assert_eq!(
            validate_search_term("").unwrap_err().field(),
            "search term"
        );
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert_eq!(validate_search_term(&long).unwrap(), long);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("9.99").unwrap().cents(), 999);
        assert_eq!(parse_price("0").unwrap().cents(), 0);
        assert_eq!(parse_price("").unwrap_err(), ValidationError::required("price"));
        assert!(matches!(
            parse_price("abc"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_price("-3"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_stock() {
        assert_eq!(parse_stock("5").unwrap(), 5);
        assert_eq!(parse_stock(" 0 ").unwrap(), 0);
        assert_eq!(parse_stock("").unwrap_err(), ValidationError::required("stock"));
        assert!(matches!(
            parse_stock("2.5"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_stock("-1"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
