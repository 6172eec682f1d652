//! Location provider that reads fixed coordinates from configuration.

use async_trait::async_trait;

use crate::ports::{Coordinates, LocationProvider, WeatherError};

/// Serves the configured coordinates.
///
/// A disabled provider behaves like a user who refused location access;
/// missing or out-of-range coordinates count as an unavailable position.
#[derive(Debug, Clone, Copy)]
pub struct ConfiguredLocation {
    coordinates: Option<Coordinates>,
    enabled: bool,
}

impl ConfiguredLocation {
    pub fn new(coordinates: Option<Coordinates>, enabled: bool) -> Self {
        Self {
            coordinates,
            enabled,
        }
    }

    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self::new(Some(Coordinates::new(latitude, longitude)), true)
    }

    pub fn disabled() -> Self {
        Self::new(None, false)
    }
}

#[async_trait]
impl LocationProvider for ConfiguredLocation {
    async fn locate(&self) -> Result<Coordinates, WeatherError> {
        if !self.enabled {
            return Err(WeatherError::PermissionDenied);
        }
        match self.coordinates {
            Some(coords) if coords.is_valid() => Ok(coords),
            _ => Err(WeatherError::PositionUnavailable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_coordinates() {
        let location = ConfiguredLocation::at(48.85, 2.35);
        assert_eq!(location.locate().await.unwrap(), Coordinates::new(48.85, 2.35));
    }

    #[tokio::test]
    async fn disabled_is_permission_denied() {
        assert_eq!(
            ConfiguredLocation::disabled().locate().await.unwrap_err(),
            WeatherError::PermissionDenied
        );
    }

    #[tokio::test]
    async fn missing_or_invalid_is_unavailable() {
        assert_eq!(
            ConfiguredLocation::new(None, true).locate().await.unwrap_err(),
            WeatherError::PositionUnavailable
        );
        assert_eq!(
            ConfiguredLocation::at(120.0, 0.0).locate().await.unwrap_err(),
            WeatherError::PositionUnavailable
        );
    }
}
