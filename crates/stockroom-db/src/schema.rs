//! # Schema
//!
//! The single table this application owns, and the statements that touch it.
//!
//! ## Table Layout
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │ products                                                         │
//! │ ──────────────────────────────────────────────────────────────── │
//! │ id           INTEGER PRIMARY KEY AUTOINCREMENT   store-assigned  │
//! │ name         TEXT    NOT NULL                    not unique      │
//! │ price_cents  INTEGER NOT NULL                    2-decimal price │
//! │ stock        INTEGER NOT NULL                                    │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `AUTOINCREMENT` keeps ids strictly increasing: an id freed by a delete is
//! never handed out again.
//!
//! There is no migration history; the table is created if absent and
//! otherwise left as is.

/// Creates the products table if it does not exist yet.
pub const CREATE_PRODUCTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        name        TEXT    NOT NULL,
        price_cents INTEGER NOT NULL,
        stock       INTEGER NOT NULL
    )
"#;

/// Every row, in id order.
pub const SELECT_ALL_PRODUCTS: &str = "SELECT * FROM products ORDER BY id";

/// Rows whose name contains the (escaped) pattern.
pub const SEARCH_PRODUCTS_BY_NAME: &str =
    r"SELECT * FROM products WHERE name LIKE ? ESCAPE '\' ORDER BY id";

pub const SELECT_PRODUCT_BY_ID: &str = "SELECT * FROM products WHERE id = ?";

pub const COUNT_PRODUCTS: &str = "SELECT COUNT(*) FROM products";

pub const INSERT_PRODUCT: &str =
    "INSERT INTO products (name, price_cents, stock) VALUES (?, ?, ?)";

pub const UPDATE_PRODUCT: &str =
    "UPDATE products SET name = ?, price_cents = ?, stock = ? WHERE id = ?";

pub const DELETE_PRODUCT: &str = "DELETE FROM products WHERE id = ?";

/// Builds a `LIKE` pattern matching names that contain `term` literally.
///
/// `%`, `_` and the escape character itself are escaped with `\`.
///
/// ## Example
/// ```rust
/// use stockroom_db::schema::contains_pattern;
///
/// assert_eq!(contains_pattern("Widg"), "%Widg%");
/// assert_eq!(contains_pattern("50%"), r"%50\%%");
/// ```
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("a_b"), r"%a\_b%");
        assert_eq!(contains_pattern(r"c:\x"), r"%c:\\x%");
        assert_eq!(contains_pattern(""), "%%");
    }
}
