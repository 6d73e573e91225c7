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
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid {0} URL: must start with http:// or https://")]
    InvalidUrl(&'static str),

    #[error("Temperature must be between 0 and 2")]
    InvalidTemperature,

    #[error("top_p must be in (0, 1]")]
    InvalidTopP,

    #[error("max_tokens must be positive")]
    InvalidMaxTokens,
}
