//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Changing any variable requires a restart.
//!
//! ## Recognized Variables
//!
//! - `BASE_URL` - Externally visible origin used to build the full short
//!   link shown to users (default: `http://localhost`)
//! - `PORT` - Listening port (default: `8000`)
//! - `DATABASE_URL` - SQLite connection string (default: `sqlite://urls.db`,
//!   the file is created on first run)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: `5`)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Origin prepended to short codes when rendering the full short link.
    pub base_url: String,
    pub port: u16,
    pub log_level: String,
    /// Maximum number of connections in the SQLite pool
    /// (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default; loading itself cannot fail, but the
    /// result should still be checked with [`Config::validate`].
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://urls.db".to_string());

        let base_url = env::var("BASE_URL").unwrap_or_else(|_| "http://localhost".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8000);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Self {
            database_url,
            base_url,
            port,
            log_level,
            db_max_connections,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `BASE_URL` does not start with `http://` or `https://`
    /// - `DATABASE_URL` is not a SQLite connection string
    /// - `PORT` is 0
    /// - `DB_MAX_CONNECTIONS` is 0
    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.port == 0 {
            anyhow::bail!("PORT must be between 1 and 65535");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Returns the socket address the server binds to.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Log level: {}", self.log_level);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
