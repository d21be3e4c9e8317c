//! # stockroom-db: Database Layer for Stockroom
//!
//! This crate is the sole gateway to the relational store.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  Form command (add_product)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    stockroom-db (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repository   │    │    Schema    │  │   │
//! │  │   │   (pool.rs)   │    │ (product.rs)  │    │  (schema.rs) │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ execute()     │◄───│ list_all      │    │ CREATE TABLE │  │   │
//! │  │   │ fetch_all()   │    │ search_by_name│    │ IF NOT EXISTS│  │   │
//! │  │   │ one connection│    │ insert/update │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (products table)                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors Are Returned, Not Shown
//! Every failure comes back as a [`DbError`] carrying the driver's message.
//! This crate never talks to the user; the form decides how to render it.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;
pub mod value;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::product::ProductRepository;
pub use value::{Execution, SqlRow, SqlValue};
