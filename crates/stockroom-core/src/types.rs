//! # Domain Types
//!
//! The one entity this application manages.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐            ┌─────────────────┐                    │
//! │  │    Product      │            │  ProductDraft   │                    │
//! │  │  ─────────────  │            │  ─────────────  │                    │
//! │  │  id (store)     │  insert ◄──│  name           │                    │
//! │  │  name           │  update ◄──│  price (Money)  │                    │
//! │  │  price (Money)  │            │  stock          │                    │
//! │  │  stock          │            │  (no id!)       │                    │
//! │  └─────────────────┘            └─────────────────┘                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is assigned by the store on insert and never changes. Writes take a
//! [`ProductDraft`], which has no id field, so callers cannot supply one.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::validation::{self, ValidationResult};

// =============================================================================
// Product
// =============================================================================

/// A stored product row: `(id, name, price, stock)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier.
    pub id: i64,

    /// Display name. Not unique.
    pub name: String,

    /// Unit price, two decimals.
    pub price: Money,

    /// Quantity on hand.
    pub stock: i64,
}

impl Product {
    /// Entry texts for this product, in form order (name, price, stock).
    ///
    /// Used when a list row is selected and its values are copied into the
    /// entries.
    pub fn entry_values(&self) -> [String; 3] {
        [
            self.name.clone(),
            self.price.to_string(),
            self.stock.to_string(),
        ]
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// The caller-supplied part of a product, used for inserts and updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: Money,
    pub stock: i64,
}

impl ProductDraft {
    /// Builds a draft from the three raw entry texts.
    ///
    /// ## Validation Order
    /// ```text
    /// 1. every entry present?     → ValidationError::Required (first empty one)
    /// 2. name length              → ValidationError::TooLong
    /// 3. price "0.00" format, >=0 → InvalidFormat / OutOfRange
    /// 4. stock whole number, >=0  → InvalidFormat / OutOfRange
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::ProductDraft;
    ///
    /// assert!(ProductDraft::parse("Gadget", "19.99", "2").is_ok());
    /// assert!(ProductDraft::parse("Gadget", "", "2").is_err());
    /// ```
    pub fn parse(name: &str, price: &str, stock: &str) -> ValidationResult<Self> {
        validation::require("name", name)?;
        validation::require("price", price)?;
        validation::require("stock", stock)?;

        Ok(ProductDraft {
            name: validation::validate_product_name(name)?,
            price: validation::parse_price(price)?,
            stock: validation::parse_stock(stock)?,
        })
    }

    /// Attaches a store-assigned id.
    pub fn with_id(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            stock: self.stock,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
