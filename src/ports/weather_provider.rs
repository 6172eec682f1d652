//! Weather Provider Port - current conditions at the user's location.
//!
//! Two ports cooperate here: `LocationProvider` resolves where the user is,
//! `WeatherProvider` turns that into a reading. Failures are classified so
//! the caller can tell the user what went wrong while falling back to a
//! default reading.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::weather::WeatherReading;

/// Port for fetching the current weather.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current reading at the user's location.
    async fn current_weather(&self) -> Result<WeatherReading, WeatherError>;
}

/// Port for resolving the device location.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn locate(&self) -> Result<Coordinates, WeatherError>;
}

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Classified weather failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// The user refused location access.
    #[error("location permission denied")]
    PermissionDenied,

    /// The device could not determine a position.
    #[error("location unavailable")]
    PositionUnavailable,

    /// Locating or fetching took longer than allowed.
    #[error("weather request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// The weather service failed or returned garbage.
    #[error("weather service error: {0}")]
    Service(String),
}

impl WeatherError {
    pub fn service(message: impl Into<String>) -> Self {
        WeatherError::Service(message.into())
    }

    /// Short machine-readable class name.
    pub fn kind(&self) -> &'static str {
        match self {
            WeatherError::PermissionDenied => "permission_denied",
            WeatherError::PositionUnavailable => "position_unavailable",
            WeatherError::Timeout { .. } => "timeout",
            WeatherError::Service(_) => "service_error",
        }
    }

    /// True for failures of the location step rather than the weather service.
    pub fn is_location_failure(&self) -> bool {
        matches!(
            self,
            WeatherError::PermissionDenied | WeatherError::PositionUnavailable
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn WeatherProvider) {}
    }

    #[test]
    fn location_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn LocationProvider) {}
    }

    #[test]
    fn error_display_includes_timeout() {
        let err = WeatherError::Timeout { timeout_secs: 10 };
        assert_eq!(err.to_string(), "weather request timed out after 10s");
        assert_eq!(err.kind(), "timeout");
    }

    #[test]
    fn coordinates_validate_ranges() {
        assert!(Coordinates::new(51.5, -0.12).is_valid());
        assert!(!Coordinates::new(91.0, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, 181.0).is_valid());
    }
}
