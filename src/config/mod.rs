//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ZEMURIA_CONSOLE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use zemuria_console::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Talking to {}", config.api.base_url);
//! ```

mod api;
mod error;
mod session;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};
pub use session::SessionConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the console core.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Analytics backend configuration (base URL, timeout)
    #[serde(default)]
    pub api: ApiConfig,

    /// Session token persistence configuration
    #[serde(default)]
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `ZEMURIA_CONSOLE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ZEMURIA_CONSOLE__API__BASE_URL=...` -> `api.base_url = ...`
    /// - `ZEMURIA_CONSOLE__SESSION__STORAGE_DIR=...` -> `session.storage_dir = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ZEMURIA_CONSOLE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        self.session.validate()?;
        Ok(())
    }
}
