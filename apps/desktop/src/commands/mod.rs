//! # Commands Module
//!
//! The five form actions and the table that dispatches them.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (Action, Outcome, COMMANDS, dispatch)
//! └── product.rs  ◄─── Add, Delete, Update, Search, Show All handlers
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Key press (F3 / Ctrl+U)                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::for_function_key(3) ──► Action::Update                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::dispatch(Action::Update, &db, &mut form)                    │
//! │         │                                                               │
//! │         │ COMMANDS lookup                                               │
//! │         ▼                                                               │
//! │  product::update_product(&db, &mut form)                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CommandResult                                                         │
//! │  ├── Ok(Completed("Product updated successfully")) → "Success" alert  │
//! │  ├── Ok(NotFound(..))                              → "Not found"      │
//! │  ├── Ok(Refreshed) / Ok(Skipped)                   → no alert         │
//! │  └── Err(ApiError)                                 → error alert      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command is awaited to completion before the next key is read.

pub mod product;

use futures::future::BoxFuture;
use futures::FutureExt;
use stockroom_db::Database;
use tracing::info;

use crate::error::ApiError;
use crate::state::FormState;

/// A form action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Add,
    Delete,
    Update,
    Search,
    ShowAll,
}

/// What a successful command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A write went through; the message is shown as a confirmation.
    Completed(String),

    /// A search matched nothing; the list is now empty.
    NotFound(String),

    /// The list was reloaded; nothing to announce.
    Refreshed,

    /// Nothing was selected, so nothing happened.
    Skipped,
}

/// Result of every command handler.
pub type CommandResult = Result<Outcome, ApiError>;

/// Signature shared by all handlers.
pub type Handler = for<'a> fn(&'a Database, &'a mut FormState) -> BoxFuture<'a, CommandResult>;

/// One row of the dispatch table.
#[derive(Clone, Copy)]
pub struct Command {
    pub action: Action,

    /// Button text in the key-hint bar
    pub label: &'static str,

    /// Function key number (`1` → F1)
    pub key: u8,

    /// Ctrl+letter alternative
    pub ctrl: char,

    pub handler: Handler,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("action", &self.action)
            .field("label", &self.label)
            .field("key", &self.key)
            .field("ctrl", &self.ctrl)
            .finish_non_exhaustive()
    }
}

/// All form commands, in button order.
pub const COMMANDS: [Command; 5] = [
    Command {
        action: Action::Add,
        label: "Add",
        key: 1,
        ctrl: 'a',
        handler: add,
    },
    Command {
        action: Action::Delete,
        label: "Delete",
        key: 2,
        ctrl: 'd',
        handler: delete,
    },
    Command {
        action: Action::Update,
        label: "Update",
        key: 3,
        ctrl: 'u',
        handler: update,
    },
    Command {
        action: Action::Search,
        label: "Search",
        key: 4,
        ctrl: 'f',
        handler: search,
    },
    Command {
        action: Action::ShowAll,
        label: "Show All",
        key: 5,
        ctrl: 'l',
        handler: show_all,
    },
];

fn add<'a>(db: &'a Database, form: &'a mut FormState) -> BoxFuture<'a, CommandResult> {
    product::add_product(db, form).boxed()
}

fn delete<'a>(db: &'a Database, form: &'a mut FormState) -> BoxFuture<'a, CommandResult> {
    product::delete_product(db, form).boxed()
}

fn update<'a>(db: &'a Database, form: &'a mut FormState) -> BoxFuture<'a, CommandResult> {
    product::update_product(db, form).boxed()
}

fn search<'a>(db: &'a Database, form: &'a mut FormState) -> BoxFuture<'a, CommandResult> {
    product::search_products(db, form).boxed()
}

fn show_all<'a>(db: &'a Database, form: &'a mut FormState) -> BoxFuture<'a, CommandResult> {
    product::show_all_products(db, form).boxed()
}

/// Table row for `action`.
pub fn command(action: Action) -> Option<&'static Command> {
    COMMANDS.iter().find(|c| c.action == action)
}

pub fn for_function_key(key: u8) -> Option<Action> {
    COMMANDS.iter().find(|c| c.key == key).map(|c| c.action)
}

pub fn for_ctrl(letter: char) -> Option<Action> {
    let letter = letter.to_ascii_lowercase();
    COMMANDS.iter().find(|c| c.ctrl == letter).map(|c| c.action)
}

/// Runs the handler registered for `action`.
pub async fn dispatch(action: Action, db: &Database, form: &mut FormState) -> CommandResult {
    let command = command(action)
        .ok_or_else(|| ApiError::internal(format!("No handler for {:?}", action)))?;

    let result = (command.handler)(db, form).await;

    match &result {
        Ok(outcome) => info!(action = command.label, ?outcome, "Command finished"),
        Err(e) => info!(action = command.label, error = %e, "Command failed"),
    }

    result
}
