//! # Product Commands
//!
//! Handlers behind the five form buttons.
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Add / Update / Delete                                │
//! │                                                                         │
//! │  entries ("Widget", "9.99", "5")  or  selected row id                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductDraft::parse ──► ValidationError? ── return, store untouched   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductRepository insert / update / delete                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  reload: list_all → form.set_rows (selection dropped)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  clear entries (Add, Update)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Outcome::Completed("Product ... successfully")                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Delete and Update without a selected row are silent no-ops
//! ([`Outcome::Skipped`]).

use stockroom_core::{validation, ProductDraft};
use stockroom_db::{Database, DbError};
use tracing::{debug, info};

use super::{CommandResult, Outcome};
use crate::error::ApiError;
use crate::state::{Field, FormState};

pub const ADDED: &str = "Product added successfully";
pub const DELETED: &str = "Product deleted successfully";
pub const UPDATED: &str = "Product updated successfully";
pub const NO_MATCHES: &str = "No products match the search term";

/// Inserts a product built from the entries.
///
/// ## Returns
/// * `Completed` - Row inserted, list reloaded, entries cleared
/// * `Err(ValidationError)` - An entry is empty or malformed; nothing written
pub async fn add_product(db: &Database, form: &mut FormState) -> CommandResult {
    let (name, price, stock) = form.entries();
    let draft = ProductDraft::parse(name, price, stock)?;

    let product = db.products().insert(&draft).await?;
    info!(id = product.id, name = %product.name, "Product added");

    reload(db, form).await?;
    form.clear_entries();

    Ok(Outcome::Completed(ADDED.to_string()))
}

/// Deletes the selected row.
pub async fn delete_product(db: &Database, form: &mut FormState) -> CommandResult {
    let Some(id) = form.selected_id() else {
        debug!("Delete without selection");
        return Ok(Outcome::Skipped);
    };

    if let Err(e) = db.products().delete(id).await {
        return Err(reload_after_failure(db, form, e).await);
    }
    info!(id = id, "Product deleted");

    reload(db, form).await?;

    Ok(Outcome::Completed(DELETED.to_string()))
}

/// Overwrites the selected row with the entries. The id is kept.
pub async fn update_product(db: &Database, form: &mut FormState) -> CommandResult {
    let Some(id) = form.selected_id() else {
        debug!("Update without selection");
        return Ok(Outcome::Skipped);
    };

    let (name, price, stock) = form.entries();
    let draft = ProductDraft::parse(name, price, stock)?;

    if let Err(e) = db.products().update(id, &draft).await {
        return Err(reload_after_failure(db, form, e).await);
    }
    info!(id = id, "Product updated");

    reload(db, form).await?;
    form.clear_entries();

    Ok(Outcome::Completed(UPDATED.to_string()))
}

/// Replaces the list with rows whose name contains the name entry.
///
/// ## Returns
/// * `Refreshed` - At least one match, list shows the matches
/// * `NotFound` - No match, list is empty
/// * `Err(ValidationError)` - Name entry empty; no query run
pub async fn search_products(db: &Database, form: &mut FormState) -> CommandResult {
    let term = validation::validate_search_term(form.entry(Field::Name))?;

    let products = db.products().search_by_name(&term).await?;
    debug!(term = %term, count = products.len(), "Search finished");

    let found = !products.is_empty();
    form.set_rows(products);

    if found {
        Ok(Outcome::Refreshed)
    } else {
        Ok(Outcome::NotFound(NO_MATCHES.to_string()))
    }
}

/// Reloads the full row set.
pub async fn show_all_products(db: &Database, form: &mut FormState) -> CommandResult {
    reload(db, form).await?;
    Ok(Outcome::Refreshed)
}

async fn reload(db: &Database, form: &mut FormState) -> Result<(), ApiError> {
    let products = db.products().list_all().await?;
    form.set_rows(products);
    Ok(())
}

/// A missing id means the list is stale; refresh it before reporting.
async fn reload_after_failure(db: &Database, form: &mut FormState, err: DbError) -> ApiError {
    if matches!(err, DbError::NotFound { .. }) {
        if let Err(e) = reload(db, form).await {
            return e;
        }
    }
    ApiError::from(err)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use stockroom_db::DbConfig;

    async fn setup() -> (Database, FormState) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        (db, FormState::new())
    }

    fn fill(form: &mut FormState, name: &str, price: &str, stock: &str) {
        form.set_entry(Field::Name, name);
        form.set_entry(Field::Price, price);
        form.set_entry(Field::Stock, stock);
    }

    async fn add(db: &Database, form: &mut FormState, name: &str, price: &str, stock: &str) {
        fill(form, name, price, stock);
        add_product(db, form).await.unwrap();
    }

    #[tokio::test]
    async fn test_add_reloads_and_clears() {
        let (db, mut form) = setup().await;
        fill(&mut form, "Widget", "9.99", "5");

        let outcome = add_product(&db, &mut form).await.unwrap();

        assert_eq!(outcome, Outcome::Completed(ADDED.to_string()));
        assert_eq!(form.rows().len(), 1);
        assert_eq!(form.rows()[0].name, "Widget");
        assert_eq!(form.entries(), ("", "", ""));
    }

    #[tokio::test]
    async fn test_add_with_empty_entry_writes_nothing() {
        let (db, mut form) = setup().await;
        fill(&mut form, "Widget", "", "5");

        let err = add_product(&db, &mut form).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(db.products().count().await.unwrap(), 0);
        assert_eq!(form.entry(Field::Name), "Widget");
    }

    #[tokio::test]
    async fn test_add_rejects_bad_price() {
        let (db, mut form) = setup().await;
        fill(&mut form, "Widget", "nine", "5");

        let err = add_product(&db, &mut form).await.unwrap_err();

        assert!(err.is_validation());
        assert!(err.message.contains("price"));
        assert_eq!(db.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_and_update_without_selection_are_noops() {
        let (db, mut form) = setup().await;
        add(&db, &mut form, "Widget", "9.99", "5").await;
        fill(&mut form, "Other", "1", "1");

        assert_eq!(delete_product(&db, &mut form).await.unwrap(), Outcome::Skipped);
        assert_eq!(update_product(&db, &mut form).await.unwrap(), Outcome::Skipped);

        let rows = db.products().list_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Widget");
    }

    #[tokio::test]
    async fn test_delete_selected() {
        let (db, mut form) = setup().await;
        add(&db, &mut form, "Widget", "9.99", "5").await;
        add(&db, &mut form, "Gadget", "19.99", "2").await;

        form.select(0);
        let outcome = delete_product(&db, &mut form).await.unwrap();

        assert_eq!(outcome, Outcome::Completed(DELETED.to_string()));
        assert_eq!(form.rows().len(), 1);
        assert_eq!(form.rows()[0].name, "Gadget");
        assert_eq!(form.selected(), None);
    }

    #[tokio::test]
    async fn test_update_selected_keeps_id() {
        let (db, mut form) = setup().await;
        add(&db, &mut form, "Widget", "9.99", "5").await;

        form.select(0);
        let id = form.selected_id().unwrap();
        form.set_entry(Field::Name, "Widget Pro");
        form.set_entry(Field::Price, "12.50");

        update_product(&db, &mut form).await.unwrap();

        assert_eq!(form.rows()[0].id, id);
        assert_eq!(form.rows()[0].name, "Widget Pro");
        assert_eq!(form.rows()[0].price.to_string(), "12.50");
        assert_eq!(form.entries(), ("", "", ""));
    }

    #[tokio::test]
    async fn test_update_validates_entries() {
        let (db, mut form) = setup().await;
        add(&db, &mut form, "Widget", "9.99", "5").await;

        form.select(0);
        form.set_entry(Field::Stock, "-1");

        let err = update_product(&db, &mut form).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(db.products().list_all().await.unwrap()[0].stock, 5);
    }

    #[tokio::test]
    async fn test_stale_selection_reports_not_found_and_reloads() {
        let (db, mut form) = setup().await;
        add(&db, &mut form, "Widget", "9.99", "5").await;
        form.select(0);

        // another writer removed the row
        db.products().delete(1).await.unwrap();

        let err = delete_product(&db, &mut form).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(form.rows().is_empty());
    }

    #[tokio::test]
    async fn test_search() {
        let (db, mut form) = setup().await;
        add(&db, &mut form, "Widget", "9.99", "5").await;
        add(&db, &mut form, "Gadget", "19.99", "2").await;

        form.set_entry(Field::Name, "Widg");
        assert_eq!(search_products(&db, &mut form).await.unwrap(), Outcome::Refreshed);
        assert_eq!(form.rows().len(), 1);
        assert_eq!(form.rows()[0].name, "Widget");

        form.set_entry(Field::Name, "Sprocket");
        assert_eq!(
            search_products(&db, &mut form).await.unwrap(),
            Outcome::NotFound(NO_MATCHES.to_string())
        );
        assert!(form.rows().is_empty());

        assert_eq!(show_all_products(&db, &mut form).await.unwrap(), Outcome::Refreshed);
        assert_eq!(form.rows().len(), 2);
    }

    #[tokio::test]
    async fn test_search_with_empty_term_runs_no_query() {
        let (db, mut form) = setup().await;
        add(&db, &mut form, "Widget", "9.99", "5").await;

        form.set_entry(Field::Name, "   ");
        let err = search_products(&db, &mut form).await.unwrap_err();

        assert!(err.is_validation());
        // list untouched
        assert_eq!(form.rows().len(), 1);
    }

    #[tokio::test]
    async fn test_overlong_search_term_finds_nothing() {
        let (db, mut form) = setup().await;
        add(&db, &mut form, "Widget", "9.99", "5").await;

        form.set_entry(Field::Name, "x".repeat(256));

        assert_eq!(
            search_products(&db, &mut form).await.unwrap(),
            Outcome::NotFound(NO_MATCHES.to_string())
        );
        assert!(form.rows().is_empty());
    }

    #[tokio::test]
    async fn test_add_trims_name_and_refuses_blank_name() {
        let (db, mut form) = setup().await;
        add(&db, &mut form, "  Widget  ", "9.99", "5").await;

        assert_eq!(db.products().list_all().await.unwrap()[0].name, "Widget");

        fill(&mut form, "   ", "9.99", "5");
        let err = add_product(&db, &mut form).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(db.products().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_store_failure_is_returned() {
        let (db, mut form) = setup().await;
        db.close().await;

        let err = show_all_products(&db, &mut form).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
