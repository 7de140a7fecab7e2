//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("API base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Request timeout must be greater than zero")]
    InvalidTimeout,

    #[error("Session storage directory must not be empty")]
    EmptyStorageDir,
}
