//! # State Module
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │    AppConfig     │  │    Database      │  │     FormState        │  │
//! │  │                  │  │  (stockroom-db)  │  │                      │  │
//! │  │  store / ui / log│  │  one connection  │  │  entries, rows,      │  │
//! │  │  read-only       │  │  owned by App    │  │  selection           │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │                                                                         │
//! │  All three are owned by `ui::App`; command handlers borrow the         │
//! │  database and the form for the duration of one command.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod form;

pub use config::{AppConfig, ConfigError, LogConfig, StoreConfig, UiConfig, CONFIG_FILE_ENV};
pub use form::{Field, FormState};
