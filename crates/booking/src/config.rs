//! # Booking Configuration Module
//!
//! Loads configuration for the booking engine and the tools built on it from
//! environment variables, with defaults where a value is optional.
//!
//! ## Environment Variables
//!
//! - `DATABASE_URL`: SQLite connection string (default: "sqlite://medcal.db?mode=rwc")
//! - `LOG_LEVEL`: Logging level (default: "info")

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://medcal.db?mode=rwc";

/// Configuration for the booking engine
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use medcal_booking::config::BookingConfig;
///
/// fn example() -> Result<()> {
///     let config = BookingConfig::from_env()?;
///     println!("Using database {}", config.database_url);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// SQLite connection string for the slot store
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,
}

impl BookingConfig {
    /// Creates a new BookingConfig from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is set but not valid unicode.
    pub fn from_env() -> Result<Self> {
        let database_url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(env::VarError::NotPresent) => DEFAULT_DATABASE_URL.to_string(),
            Err(e) => return Err(e).wrap_err("Invalid DATABASE_URL value"),
        };

        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        Ok(Self {
            database_url,
            log_level,
        })
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            log_level: Level::INFO,
        }
    }
}

/// Maps a `LOG_LEVEL` value to a tracing level. Unknown values fall back to INFO.
pub fn parse_log_level(raw: &str) -> Level {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
