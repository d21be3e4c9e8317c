//! # Database Handle
//!
//! Connection setup and the generic statement gateway for SQLite.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Database Handle Lifecycle                          │
//! │                                                                         │
//! │  App Startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::new(path) ← one connection, no idle timeout                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await ← open + ensure_schema()                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │            SqlitePool                    │                           │
//! │  │  ┌─────┐                                 │  (max_connections = 1)    │
//! │  │  │Conn1│  held for the process lifetime  │                           │
//! │  │  └─────┘                                 │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  execute() / fetch_all() / products()                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::close().await ← at shutdown                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::repository::product::ProductRepository;
use crate::schema;
use crate::value::{Execution, SqlRow, SqlValue};

/// Path value that selects a private in-memory database.
const IN_MEMORY: &str = ":memory:";

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("/path/to/products.db")
///     .connect_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 1 (a single interactive user, a single connection)
    pub max_connections: u32,

    /// Connection acquire timeout.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection.
    /// Default: none, the connection lives until `close()`
    pub idle_timeout: Option<Duration>,

    /// Whether to create the products table on connect.
    /// Default: true
    pub ensure_schema: bool,
}

impl DbConfig {
    /// Creates a new database configuration with the given path.
    ///
    /// ## Arguments
    /// * `path` - Path to the SQLite database file. Will be created if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: None,
            ensure_schema: true,
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max.max(1);
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to create the products table on connect.
    pub fn ensure_schema(mut self, ensure: bool) -> Self {
        self.ensure_schema = ensure;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let db = Database::new(DbConfig::in_memory()).await?;
    /// // Database is isolated, perfect for tests
    /// ```
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(IN_MEMORY),
            max_connections: 1, // In-memory requires single connection
            connect_timeout: Duration::from_secs(5),
            idle_timeout: None,
            ensure_schema: true,
        }
    }

    /// Whether this configuration points at an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.database_path.as_os_str() == IN_MEMORY
    }
}

// =============================================================================
// Database
// =============================================================================

/// Owned handle to the store.
///
/// Cloning is cheap (the pool is reference counted) and every clone talks to
/// the same single connection.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the store.
    ///
    /// ## What This Does
    /// 1. Creates the database file if it doesn't exist
    /// 2. Configures SQLite (WAL, NORMAL synchronous)
    /// 3. Opens exactly `max_connections` connections and keeps them
    /// 4. Creates the products table (if enabled)
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Initializing database connection"
        );

        let base = if config.is_in_memory() {
            SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
        } else {
            SqliteConnectOptions::new().filename(&config.database_path)
        };

        let connect_options = base
            // WAL mode: readers don't block the writer
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .create_if_missing(true);

        debug!("Connection options configured");

        // min == max: the connection is opened now, not on first use
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(config.idle_timeout)
            .max_lifetime(None::<Duration>)
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!(
            max_connections = config.max_connections,
            "Database pool created"
        );

        let db = Database { pool };

        if config.ensure_schema {
            db.ensure_schema().await?;
        }

        Ok(db)
    }

    /// Creates the products table if it is absent.
    ///
    /// Idempotent: safe to call on every startup.
    pub async fn ensure_schema(&self) -> DbResult<()> {
        info!("Ensuring products table exists");
        self.execute(schema::CREATE_PRODUCTS_TABLE, &[]).await?;
        Ok(())
    }

    /// Runs one parameterized statement.
    ///
    /// ## Read vs Write
    /// ```text
    /// "SELECT ..."  → Execution::Rows(every row, in order)
    /// anything else → committed → Execution::Written { rows_affected, .. }
    /// ```
    ///
    /// Parameters bind to `?` placeholders in order. Each statement runs in
    /// its own implicit transaction, so a successful write is already
    /// committed when this returns.
    pub async fn execute(&self, statement: &str, params: &[SqlValue]) -> DbResult<Execution> {
        debug!(
            statement = %statement.trim(),
            params = params.len(),
            "Executing statement"
        );

        let query = params
            .iter()
            .fold(sqlx::query(statement), |query, param| param.bind_to(query));

        if is_read_statement(statement) {
            let rows = query.fetch_all(&self.pool).await?;
            let rows = rows
                .iter()
                .map(SqlRow::decode)
                .collect::<DbResult<Vec<_>>>()?;
            debug!(count = rows.len(), "Statement returned rows");
            Ok(Execution::Rows(rows))
        } else {
            let result = query.execute(&self.pool).await?;
            debug!(
                rows_affected = result.rows_affected(),
                "Statement committed"
            );
            Ok(Execution::Written {
                rows_affected: result.rows_affected(),
                last_insert_id: result.last_insert_rowid(),
            })
        }
    }

    /// Every product row, ordered by id.
    pub async fn fetch_all(&self) -> DbResult<Vec<SqlRow>> {
        Ok(self.execute(schema::SELECT_ALL_PRODUCTS, &[]).await?.into_rows())
    }

    /// Returns the product repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.clone())
    }

    /// Closes the connection.
    ///
    /// ## Note
    /// After calling close, all operations fail with
    /// `DbError::ConnectionFailed`.
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }

    /// Checks if the database is healthy (can execute queries).
    pub async fn health_check(&self) -> bool {
        self.execute("SELECT 1", &[]).await.is_ok()
    }
}

/// A statement whose first keyword is SELECT returns rows.
fn is_read_statement(statement: &str) -> bool {
    statement
        .trim_start()
        .get(..6)
        .is_some_and(|keyword| keyword.eq_ignore_ascii_case("select"))
}

// =============================================================================
// Unit Tests
// =============================================================================
