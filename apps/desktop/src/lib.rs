//! # Stockroom Desktop Library
//!
//! The product form: configuration, command dispatch and terminal UI.
//!
//! ## Module Organization
//! ```text
//! stockroom_desktop/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── config.rs   ◄─── AppConfig (figment: defaults, file, env)
//! │   └── form.rs     ◄─── FormState (entries, rows, selection)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Action, Outcome, COMMANDS table, dispatch
//! │   └── product.rs  ◄─── Add / Delete / Update / Search / Show All
//! ├── ui/
//! │   ├── mod.rs      ◄─── App + event loop
//! │   ├── input.rs    ◄─── key → Input
//! │   ├── view.rs     ◄─── rendering
//! │   └── alert.rs    ◄─── CommandResult → modal alert
//! └── error.rs        ◄─── ApiError returned by commands
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod ui;

use std::error::Error;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use stockroom_db::Database;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{AppConfig, LogConfig};
use ui::App;

/// Runs the product form until the user quits.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → stockroom.toml → STOCKROOM_* env                       │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber writing to the log file (terminal is the UI)   │
/// │     • RUST_LOG overrides log.filter                                     │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • one SQLite connection, WAL mode                                   │
/// │     • CREATE TABLE IF NOT EXISTS products                               │
/// │                                                                         │
/// │  4. Load the list, enter the terminal, run the event loop ────────────► │
/// │                                                                         │
/// │  5. Restore the terminal, close the connection ───────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Any failure before the form is shown is returned; failures inside the
/// form are shown as alerts and never end the process.
pub fn run() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.log, &config.log_path()?)?;

    info!("Starting Stockroom");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_form(config))
}

async fn run_form(config: AppConfig) -> Result<(), Box<dyn Error>> {
    let db_config = config.db_config()?;
    info!(db_path = ?db_config.database_path, "Database path determined");

    let db = Database::new(db_config).await?;
    info!("Database connected");

    let mut app = App::new(db.clone(), config.ui);
    app.load().await;

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal).await;
    ratatui::restore();

    db.close().await;
    info!("Stockroom stopped");

    result.map_err(Into::into)
}

/// Initializes the tracing subscriber, appending to `path`.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom=trace` - Trace for stockroom crates only
/// - Default: `log.filter` from the config
fn init_tracing(config: &LogConfig, path: &Path) -> Result<(), Box<dyn Error>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| -> Box<dyn Error> { e })?;

    Ok(())
}
