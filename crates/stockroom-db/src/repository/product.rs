//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - Full listing (startup load, "Show All")
//! - Substring search on name
//! - Insert / update / delete by id
//!
//! ## Name Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Name Search Works                                │
//! │                                                                         │
//! │  User types: "Widg"                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  contains_pattern("Widg") → "%Widg%"   (% and _ escaped)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ products                                │                           │
//! │  │                                         │                           │
//! │  │ 1 | Widget      | 999  | 5              │ ← MATCH!                  │
//! │  │ 2 | Gadget      | 1999 | 2              │                           │
//! │  │ 3 | Widget Pro  | 1250 | 5              │ ← MATCH!                  │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Results: [1, 3] in id order                                           │
//! │                                                                         │
//! │  Matching is SQLite LIKE: case-insensitive for ASCII letters.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockroom_core::{Money, Product, ProductDraft};
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::pool::Database;
use crate::schema;
use crate::value::{Execution, SqlRow, SqlValue};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let created = repo.insert(&draft).await?;
/// let matches = repo.search_by_name("Widg").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    db: Database,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(db: Database) -> Self {
        ProductRepository { db }
    }

    /// Lists every product, ordered by id.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let rows = self.db.fetch_all().await?;
        decode_products(rows)
    }

    /// Products whose name contains `term` as a substring.
    ///
    /// ## Arguments
    /// * `term` - Literal text; LIKE wildcards in it are escaped
    pub async fn search_by_name(&self, term: &str) -> DbResult<Vec<Product>> {
        debug!(term = %term, "Searching products by name");

        let rows = self
            .db
            .execute(
                schema::SEARCH_PRODUCTS_BY_NAME,
                &[SqlValue::Text(schema::contains_pattern(term))],
            )
            .await?
            .into_rows();

        let products = decode_products(rows)?;
        debug!(count = products.len(), "Search returned products");
        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let rows = self
            .db
            .execute(schema::SELECT_PRODUCT_BY_ID, &[SqlValue::Integer(id)])
            .await?
            .into_rows();

        rows.into_iter().next().map(decode_product).transpose()
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// The stored product, carrying the id the store assigned.
    pub async fn insert(&self, draft: &ProductDraft) -> DbResult<Product> {
        debug!(name = %draft.name, "Inserting product");

        let execution = self
            .db
            .execute(schema::INSERT_PRODUCT, &draft_params(draft))
            .await?;

        match execution {
            Execution::Written { last_insert_id, .. } => Ok(draft.clone().with_id(last_insert_id)),
            Execution::Rows(_) => Err(DbError::Internal(
                "insert statement returned rows".to_string(),
            )),
        }
    }

    /// Overwrites name, price and stock of product `id`.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - No product with this id
    pub async fn update(&self, id: i64, draft: &ProductDraft) -> DbResult<()> {
        debug!(id = %id, "Updating product");

        let mut params = draft_params(draft).to_vec();
        params.push(SqlValue::Integer(id));

        let execution = self.db.execute(schema::UPDATE_PRODUCT, &params).await?;

        if execution.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Deletes product `id`.
    ///
    /// ## Returns
    /// * `Ok(())` - Row removed
    /// * `Err(DbError::NotFound)` - No product with this id
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = %id, "Deleting product");

        let execution = self
            .db
            .execute(schema::DELETE_PRODUCT, &[SqlValue::Integer(id)])
            .await?;

        if execution.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts total products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let rows = self
            .db
            .execute(schema::COUNT_PRODUCTS, &[])
            .await?
            .into_rows();

        rows.first()
            .ok_or_else(|| DbError::decode("COUNT(*)", "no row returned"))?
            .integer(0, "COUNT(*)")
    }
}

/// Parameter tuple `(name, price_cents, stock)`.
fn draft_params(draft: &ProductDraft) -> [SqlValue; 3] {
    [
        SqlValue::from(draft.name.clone()),
        SqlValue::from(draft.price),
        SqlValue::Integer(draft.stock),
    ]
}

/// Row `(id, name, price_cents, stock)` → Product.
fn decode_product(row: SqlRow) -> DbResult<Product> {
    Ok(Product {
        id: row.integer(0, "id")?,
        name: row.text(1, "name")?,
        price: Money::from_cents(row.integer(2, "price_cents")?),
        stock: row.integer(3, "stock")?,
    })
}

fn decode_products(rows: Vec<SqlRow>) -> DbResult<Vec<Product>> {
    rows.into_iter().map(decode_product).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::DbConfig;

    async fn repo() -> ProductRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().products()
    }

    fn draft(name: &str, price: &str, stock: &str) -> ProductDraft {
        ProductDraft::parse(name, price, stock).unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = repo().await;

        let widget = repo.insert(&draft("Widget", "9.99", "5")).await.unwrap();
        let gadget = repo.insert(&draft("Gadget", "19.99", "2")).await.unwrap();

        assert_eq!(widget.id, 1);
        assert_eq!(gadget.id, 2);
        assert_eq!(repo.list_all().await.unwrap(), vec![widget, gadget]);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = repo().await;

        repo.insert(&draft("A", "1", "1")).await.unwrap();
        let b = repo.insert(&draft("B", "1", "1")).await.unwrap();
        repo.delete(b.id).await.unwrap();

        let c = repo.insert(&draft("C", "1", "1")).await.unwrap();
        assert!(c.id > b.id);
    }

    #[tokio::test]
    async fn test_update_preserves_id() {
        let repo = repo().await;
        let widget = repo.insert(&draft("Widget", "9.99", "5")).await.unwrap();
        let gadget = repo.insert(&draft("Gadget", "19.99", "2")).await.unwrap();

        repo.update(widget.id, &draft("Widget Pro", "12.50", "5"))
            .await
            .unwrap();

        let updated = repo.get_by_id(widget.id).await.unwrap().unwrap();
        assert_eq!(updated.name, "Widget Pro");
        assert_eq!(updated.price, Money::from_cents(1250));
        assert_eq!(repo.get_by_id(gadget.id).await.unwrap(), Some(gadget));
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_id() {
        let repo = repo().await;

        assert!(matches!(
            repo.update(99, &draft("X", "1", "1")).await,
            Err(DbError::NotFound { .. })
        ));
        assert!(matches!(repo.delete(99).await, Err(DbError::NotFound { .. })));
        assert_eq!(repo.get_by_id(99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_removes_only_that_row() {
        let repo = repo().await;
        let a = repo.insert(&draft("A", "1", "1")).await.unwrap();
        let b = repo.insert(&draft("B", "2", "2")).await.unwrap();
        let c = repo.insert(&draft("C", "3", "3")).await.unwrap();

        repo.delete(b.id).await.unwrap();

        assert_eq!(repo.list_all().await.unwrap(), vec![a, c]);
    }

    #[tokio::test]
    async fn test_search_by_name_is_substring_match() {
        let repo = repo().await;
        let widget = repo.insert(&draft("Widget", "9.99", "5")).await.unwrap();
        repo.insert(&draft("Gadget", "19.99", "2")).await.unwrap();
        let pro = repo.insert(&draft("Pro Widget", "12.50", "1")).await.unwrap();

        assert_eq!(
            repo.search_by_name("idge").await.unwrap(),
            vec![widget.clone(), pro]
        );
        assert_eq!(repo.search_by_name("Widget").await.unwrap().len(), 2);
        assert!(repo.search_by_name("Sprocket").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let repo = repo().await;
        repo.insert(&draft("Widget", "9.99", "5")).await.unwrap();
        let discount = repo.insert(&draft("50% off", "1", "1")).await.unwrap();

        assert!(repo.search_by_name("W_dget").await.unwrap().is_empty());
        assert_eq!(repo.search_by_name("%").await.unwrap(), vec![discount]);
    }
}
