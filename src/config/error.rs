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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Invalid timeout: {0}")]
    InvalidTimeout(&'static str),

    #[error("Invalid weather base URL")]
    InvalidWeatherUrl,

    #[error("Latitude must be within -90..=90 and longitude within -180..=180")]
    InvalidCoordinates,

    #[error("Latitude and longitude must be set together")]
    IncompleteCoordinates,

    #[error("Fallback location label must not be empty")]
    EmptyFallbackLocation,
}
