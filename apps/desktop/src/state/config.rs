//! # Configuration
//!
//! Application configuration loaded once at startup.
//!
//! ## Configuration Sources (later wins)
//! 1. Defaults (this file)
//! 2. TOML file: `$STOCKROOM_CONFIG`, else `stockroom.toml` in the platform
//!    config directory
//! 3. Environment variables (`STOCKROOM_*`, `__` separates sections)
//!
//! ```toml
//! [store]
//! path = "/srv/stockroom/products.db"
//!
//! [ui]
//! currency_symbol = "€"
//!
//! [log]
//! filter = "debug"
//! ```
//!
//! Same thing through the environment:
//! `STOCKROOM_STORE__PATH=/srv/stockroom/products.db`
//!
//! Configuration is read-only after loading.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use stockroom_db::DbConfig;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_FILE_ENV: &str = "STOCKROOM_CONFIG";

const ENV_PREFIX: &str = "STOCKROOM_";
const CONFIG_FILE_NAME: &str = "stockroom.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Could not determine app data directory")]
    NoDataDir,

    #[error("Could not create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Load(Box::new(err))
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

/// Where the products table lives and how the connection is opened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Explicit database file. Overrides `database`.
    pub path: Option<PathBuf>,

    /// File stem inside the platform data directory.
    /// Default: "products" (→ `products.db`)
    pub database: String,

    pub max_connections: u32,

    pub connect_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            path: None,
            database: "products".to_string(),
            max_connections: 1,
            connect_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Title bar text
    pub title: String,

    /// Prefix for prices in the list
    pub currency_symbol: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            title: "Product Management".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directives, used when `RUST_LOG` is unset
    pub filter: String,

    /// Log file. Default: `stockroom.log` in the data directory
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: "info,stockroom=debug,sqlx=warn".to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Loads defaults, the config file and `STOCKROOM_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::figment(config_file_path()).extract()?)
    }

    /// The provider stack, with an optional TOML file in the middle.
    ///
    /// A missing file is skipped.
    pub fn figment(file: Option<PathBuf>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(file) = file {
            figment = figment.merge(Toml::file(file));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Resolves the database file, creating its directory if needed.
    ///
    /// ## Platform-Specific Defaults
    /// - **macOS**: `~/Library/Application Support/com.stockroom.stockroom/products.db`
    /// - **Windows**: `%APPDATA%\stockroom\stockroom\data\products.db`
    /// - **Linux**: `~/.local/share/stockroom/products.db`
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let path = match &self.store.path {
            Some(path) => path.clone(),
            None => data_dir()?.join(format!("{}.db", self.store.database)),
        };
        ensure_parent(&path)?;
        Ok(path)
    }

    /// Resolves the log file, creating its directory if needed.
    pub fn log_path(&self) -> Result<PathBuf, ConfigError> {
        let path = match &self.log.file {
            Some(path) => path.clone(),
            None => data_dir()?.join("stockroom.log"),
        };
        ensure_parent(&path)?;
        Ok(path)
    }

    /// Connection settings for [`stockroom_db::Database::new`].
    pub fn db_config(&self) -> Result<DbConfig, ConfigError> {
        Ok(DbConfig::new(self.database_path()?)
            .max_connections(self.store.max_connections)
            .connect_timeout(Duration::from_secs(self.store.connect_timeout_secs)))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "stockroom", "stockroom")
}

fn data_dir() -> Result<PathBuf, ConfigError> {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(ConfigError::NoDataDir)
}

/// `$STOCKROOM_CONFIG`, else the platform config file.
fn config_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_FILE_ENV) {
        return Some(PathBuf::from(path));
    }
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn ensure_parent(path: &Path) -> Result<(), ConfigError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            std::fs::create_dir_all(dir).map_err(|source| ConfigError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config: AppConfig = AppConfig::figment(None).extract()?;
            assert_eq!(config, AppConfig::default());
            assert_eq!(config.store.database, "products");
            assert_eq!(config.store.max_connections, 1);
            assert_eq!(config.ui.title, "Product Management");
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "stockroom.toml",
                r#"
                [store]
                path = "shop.db"

                [ui]
                currency_symbol = "€"
                title = "From file"
                "#,
            )?;
            jail.set_env("STOCKROOM_UI__TITLE", "From env");

            let config: AppConfig =
                AppConfig::figment(Some("stockroom.toml".into())).extract()?;

            assert_eq!(config.store.path, Some(PathBuf::from("shop.db")));
            assert_eq!(config.ui.currency_symbol, "€");
            assert_eq!(config.ui.title, "From env");
            assert_eq!(config.log, LogConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_is_skipped() {
        Jail::expect_with(|_jail| {
            let config: AppConfig =
                AppConfig::figment(Some("does-not-exist.toml".into())).extract()?;
            assert_eq!(config, AppConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_explicit_paths() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.store.path = Some(dir.path().join("nested").join("p.db"));
        config.log.file = Some(dir.path().join("logs").join("s.log"));

        let db_path = config.database_path().unwrap();
        assert!(db_path.parent().unwrap().is_dir());
        assert!(config.log_path().unwrap().parent().unwrap().is_dir());

        let db_config = config.db_config().unwrap();
        assert_eq!(db_config.database_path, db_path);
        assert_eq!(db_config.max_connections, 1);
    }
}
