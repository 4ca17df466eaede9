//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the SalonSlot API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `SLOT_APPOINTMENT_BUFFER_MINUTES`: Cleanup time after each appointment (default: 10)
//! - `SLOT_PREPARATION_BUFFER_MINUTES`: Lead time added to "now" (default: 15)
//! - `SLOT_ROUNDING_MINUTES`: Boundary the first slot is rounded up to (default: 15)
//! - `SLOT_CADENCE_MINUTES`: Spacing between slots (default: 30)

use eyre::{Result, WrapErr};
use salonslot_core::availability::SlotPolicy;
use std::env;
use tracing::Level;

/// Configuration for the SalonSlot API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use salonslot_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Buffers, rounding and cadence used by the availability engine
    pub slot_policy: SlotPolicy,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - A numeric value cannot be parsed
    /// - The resulting slot policy is invalid (e.g. a zero cadence)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        // Network settings
        let host = var("API_HOST", "0.0.0.0");
        let port = var("API_PORT", "3000")
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| eyre::eyre!("DATABASE_URL environment variable must be set"))?;

        // Logging settings
        let log_level = match var("LOG_LEVEL", "info").to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        // Performance settings
        let request_timeout = var("API_REQUEST_TIMEOUT_SECONDS", "30")
            .parse()
            .wrap_err("Invalid API_REQUEST_TIMEOUT_SECONDS value")?;

        // Availability engine settings
        let defaults = SlotPolicy::default();
        let minutes = |key: &str, default: i64| -> Result<i64> {
            match lookup(key) {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .wrap_err_with(|| format!("Invalid {} value: {}", key, raw)),
                None => Ok(default),
            }
        };
        let slot_policy = SlotPolicy {
            appointment_buffer_minutes: minutes(
                "SLOT_APPOINTMENT_BUFFER_MINUTES",
                defaults.appointment_buffer_minutes,
            )?,
            preparation_buffer_minutes: minutes(
                "SLOT_PREPARATION_BUFFER_MINUTES",
                defaults.preparation_buffer_minutes,
            )?,
            rounding_minutes: minutes("SLOT_ROUNDING_MINUTES", defaults.rounding_minutes)?,
            cadence_minutes: minutes("SLOT_CADENCE_MINUTES", defaults.cadence_minutes)?,
        };
        slot_policy.validate()?;

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            slot_policy,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
