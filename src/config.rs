//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and then handed to
//! constructors explicitly. Nothing reads the environment after that.
//!
//! ## Storage
//!
//! ```bash
//! export DATABASE_URL="sqlite://shortener.db"
//! # or, equivalently
//! export DATABASE_FILE="shortener.db"
//! ```
//!
//! If `DATABASE_URL` is not set, it is built from `DATABASE_FILE`
//! (default: `shortener.db`).
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Prefix for returned short URLs (default: `http://localhost:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CODE_LENGTH` - Generated code length (default: 8)
//! - `CODE_MAX_ATTEMPTS` - Code generation attempts per create (default: 10)
//! - `DB_MAX_CONNECTIONS`, `DB_ACQUIRE_TIMEOUT`, `DB_BUSY_TIMEOUT`,
//!   `DB_IDLE_TIMEOUT`, `DB_MAX_LIFETIME` - Pool settings, see [`StorageConfig`]

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, DEFAULT_MAX_ATTEMPTS};

/// Settings for the SQLite connection pool.
///
/// Passed to [`crate::infrastructure::persistence::SqliteUrlMappingRepository::connect`].
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub database_url: String,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection before failing
    /// (`DB_ACQUIRE_TIMEOUT`, default: 5).
    pub acquire_timeout: u64,
    /// Seconds SQLite waits on a locked database before failing
    /// (`DB_BUSY_TIMEOUT`, default: 5).
    pub busy_timeout: u64,
    /// Idle connection lifetime in seconds (`DB_IDLE_TIMEOUT`, default: 600).
    pub idle_timeout: u64,
    /// Maximum connection lifetime in seconds (`DB_MAX_LIFETIME`, default: 1800).
    pub max_lifetime: u64,
}

impl StorageConfig {
    /// Storage settings with defaults for the given database URL.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 5,
            acquire_timeout: 5,
            busy_timeout: 5,
            idle_timeout: 600,
            max_lifetime: 1800,
        }
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout)
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.busy_timeout)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout)
    }

    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime)
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub listen_addr: String,
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    pub code_length: usize,
    pub code_max_attempts: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Missing variables fall back to defaults; only malformed numbers are
    /// rejected here. Range checks happen in [`Config::validate`].
    pub fn from_env() -> Result<Self> {
        let storage = StorageConfig {
            database_url: Self::load_database_url(),
            max_connections: parse_var("DB_MAX_CONNECTIONS", 5)?,
            acquire_timeout: parse_var("DB_ACQUIRE_TIMEOUT", 5)?,
            busy_timeout: parse_var("DB_BUSY_TIMEOUT", 5)?,
            idle_timeout: parse_var("DB_IDLE_TIMEOUT", 600)?,
            max_lifetime: parse_var("DB_MAX_LIFETIME", 1800)?,
        };

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            storage,
            listen_addr,
            base_url,
            log_level,
            log_format,
            code_length: parse_var("CODE_LENGTH", DEFAULT_CODE_LENGTH)?,
            code_max_attempts: parse_var("CODE_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?,
        })
    }

    /// Loads the database URL.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. Built from `DATABASE_FILE` (default: `shortener.db`)
    fn load_database_url() -> String {
        if let Ok(url) = env::var("DATABASE_URL") {
            return url;
        }

        let file = env::var("DATABASE_FILE").unwrap_or_else(|_| "shortener.db".to_string());
        format!("sqlite://{}", file)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `database_url` is not an SQLite URL
    /// - code generation or pool settings are out of range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.storage.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.storage.database_url
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if !(4..=32).contains(&self.code_length) {
            anyhow::bail!(
                "CODE_LENGTH must be between 4 and 32, got {}",
                self.code_length
            );
        }

        if !(1..=100).contains(&self.code_max_attempts) {
            anyhow::bail!(
                "CODE_MAX_ATTEMPTS must be between 1 and 100, got {}",
                self.code_max_attempts
            );
        }

        if self.storage.max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.storage.acquire_timeout == 0 {
            anyhow::bail!("DB_ACQUIRE_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Database: {}", self.storage.database_url);
        tracing::info!(
            "  Pool: max {} connections, acquire timeout {}s, busy timeout {}s",
            self.storage.max_connections,
            self.storage.acquire_timeout,
            self.storage.busy_timeout
        );
        tracing::info!(
            "  Codes: length {}, max attempts {}",
            self.code_length,
            self.code_max_attempts
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Reads and parses an optional variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            storage: StorageConfig::new("sqlite://test.db"),
            listen_addr: "0.0.0.0:3000".to_string(),
            base_url: "http://localhost:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            code_length: 8,
            code_max_attempts: 10,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.storage.database_url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());

        config.storage.database_url = "sqlite::memory:".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_code_settings_validation() {
        let mut config = valid_config();

        config.code_length = 3;
        assert!(config.validate().is_err());

        config.code_length = 8;
        config.code_max_attempts = 0;
        assert!(config.validate().is_err());

        config.code_max_attempts = 10;
        config.storage.max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_load_database_url_from_file() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("DATABASE_URL");
            env::set_var("DATABASE_FILE", "links.db");
        }

        assert_eq!(Config::load_database_url(), "sqlite://links.db");

        unsafe {
            env::remove_var("DATABASE_FILE");
        }

        assert_eq!(Config::load_database_url(), "sqlite://shortener.db");
    }

    #[test]
    #[serial]
    fn test_database_url_priority() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DATABASE_URL", "sqlite://from-url.db");
            env::set_var("DATABASE_FILE", "from-file.db");
        }

        let url = Config::load_database_url();

        assert!(url.contains("from-url"));
        assert!(!url.contains("from-file"));

        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("DATABASE_FILE");
        }
    }

    #[test]
    #[serial]
    fn test_invalid_number_is_rejected() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("CODE_LENGTH", "eight");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("CODE_LENGTH"));

        unsafe {
            env::remove_var("CODE_LENGTH");
        }
    }
}
