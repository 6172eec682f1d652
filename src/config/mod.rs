//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables through the
//! `config` and `dotenvy` crates. Variables carry the `LOOKBOOK` prefix and
//! nested values are separated by double underscores. Every section has
//! defaults, so an empty environment yields a runnable development setup.
//!
//! # Example
//!
//! ```no_run
//! use lookbook::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod server;
mod store;
mod weather;

pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use store::StoreConfig;
pub use weather::WeatherConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather provider, location and fallback reading
    #[serde(default)]
    pub weather: WeatherConfig,

    /// In-memory store behaviour
    #[serde(default)]
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads `LOOKBOOK__*` variables:
    ///
    /// - `LOOKBOOK__SERVER__PORT=3000` -> `server.port = 3000`
    /// - `LOOKBOOK__WEATHER__API_KEY=...` -> `weather.api_key = ...`
    /// - `LOOKBOOK__STORE__SIMULATE_LATENCY=false` -> `store.simulate_latency = false`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its field type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LOOKBOOK")
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
    /// Returns `ValidationError` for a bad port, host, timeout or coordinate.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.weather.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
