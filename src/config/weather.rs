//! Weather provider configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::weather::{WeatherCondition, WeatherReading};
use crate::ports::Coordinates;

/// Weather provider configuration
///
/// Without an API key every resolution falls back to the configured reading.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key
    pub api_key: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Upper bound on one weather resolution, location included
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// When false, location lookups fail as if the user refused access
    #[serde(default = "default_location_enabled")]
    pub location_enabled: bool,

    #[serde(default = "default_fallback_temperature")]
    pub fallback_temperature_c: i32,

    #[serde(default = "default_fallback_condition")]
    pub fallback_condition: String,

    #[serde(default = "default_fallback_location")]
    pub fallback_location: String,
}

impl WeatherConfig {
    /// API key wrapped for handing to the provider
    pub fn api_key(&self) -> Option<Secret<String>> {
        self.api_key
            .as_ref()
            .filter(|k| !k.trim().is_empty())
            .map(|k| Secret::new(k.clone()))
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Configured coordinates, if both halves are present
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }

    /// Reading shown when the live weather cannot be resolved
    pub fn fallback_reading(&self) -> WeatherReading {
        WeatherReading::new(
            self.fallback_temperature_c,
            WeatherCondition::parse(&self.fallback_condition),
            self.fallback_location.clone(),
        )
    }

    /// Validate weather configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=60).contains(&self.timeout_secs) {
            return Err(ValidationError::InvalidTimeout("weather.timeout_secs"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidWeatherUrl);
        }
        match (self.latitude, self.longitude) {
            (Some(_), None) | (None, Some(_)) => {
                return Err(ValidationError::IncompleteCoordinates)
            }
            _ => {}
        }
        if let Some(coords) = self.coordinates() {
            if !coords.is_valid() {
                return Err(ValidationError::InvalidCoordinates);
            }
        }
        if self.fallback_location.trim().is_empty() {
            return Err(ValidationError::EmptyFallbackLocation);
        }
        Ok(())
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            latitude: None,
            longitude: None,
            location_enabled: default_location_enabled(),
            fallback_temperature_c: default_fallback_temperature(),
            fallback_condition: default_fallback_condition(),
            fallback_location: default_fallback_location(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_location_enabled() -> bool {
    true
}

fn default_fallback_temperature() -> i32 {
    22
}

fn default_fallback_condition() -> String {
    "clear".to_string()
}

fn default_fallback_location() -> String {
    "Default Location".to_string()
}
