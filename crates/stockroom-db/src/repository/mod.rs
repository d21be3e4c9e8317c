//! # Repository Module
//!
//! Typed access to the products table.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  Form command                                                          │
//! │       │                                                                 │
//! │       │  db.products().search_by_name("Widg")                          │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── builds the statement + parameter tuple                            │
//! │  └── turns SqlRow tuples back into Product values                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::execute(statement, params)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD and search

pub mod product;
