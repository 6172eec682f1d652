//! ResolveWeatherHandler - turns the weather provider into an infallible read.
//!
//! Any provider failure, including running past the timeout, is recovered
//! here: the configured fallback reading is substituted and a notice
//! describes what went wrong.

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::weather::WeatherReading;
use crate::ports::{WeatherError, WeatherProvider};

/// Non-blocking notice shown when the live weather could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherNotice {
    /// Failure class: permission_denied, position_unavailable, timeout, service_error.
    pub kind: &'static str,
    pub message: &'static str,
}

impl WeatherNotice {
    pub fn for_error(error: &WeatherError) -> Self {
        let message = match error {
            WeatherError::PermissionDenied => {
                "Location access denied. Please enable location services to get weather-appropriate outfit suggestions."
            }
            WeatherError::PositionUnavailable => {
                "Location information is unavailable. Using default weather for outfit suggestions."
            }
            WeatherError::Timeout { .. } => {
                "Location request timed out. Using default weather for outfit suggestions."
            }
            WeatherError::Service(_) => {
                "Weather service unavailable. Using default conditions for outfit suggestions."
            }
        };
        Self {
            kind: error.kind(),
            message,
        }
    }
}

/// Outcome of a weather resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWeather {
    /// Reading to display; the fallback when `notice` is set.
    pub reading: WeatherReading,
    pub notice: Option<WeatherNotice>,
}

impl ResolvedWeather {
    pub fn is_live(&self) -> bool {
        self.notice.is_none()
    }

    /// The reading, only if it came from the provider.
    pub fn live_reading(&self) -> Option<&WeatherReading> {
        self.is_live().then_some(&self.reading)
    }
}

/// Handler resolving current weather with timeout and fallback.
pub struct ResolveWeatherHandler {
    provider: Arc<dyn WeatherProvider>,
    timeout: Duration,
    fallback: WeatherReading,
}

impl ResolveWeatherHandler {
    pub fn new(provider: Arc<dyn WeatherProvider>, timeout: Duration, fallback: WeatherReading) -> Self {
        Self {
            provider,
            timeout,
            fallback,
        }
    }

    pub async fn handle(&self) -> ResolvedWeather {
        match self.fetch().await {
            Ok(reading) => {
                tracing::debug!(
                    temperature_c = reading.temperature_c,
                    condition = reading.condition.as_str(),
                    location = %reading.location,
                    "weather resolved"
                );
                ResolvedWeather {
                    reading,
                    notice: None,
                }
            }
            Err(error) => {
                tracing::warn!(kind = error.kind(), error = %error, "weather unavailable, using fallback");
                ResolvedWeather {
                    reading: self.fallback.clone(),
                    notice: Some(WeatherNotice::for_error(&error)),
                }
            }
        }
    }

    async fn fetch(&self) -> Result<WeatherReading, WeatherError> {
        tokio::time::timeout(self.timeout, self.provider.current_weather())
            .await
            .map_err(|_| WeatherError::Timeout {
                timeout_secs: self.timeout.as_secs(),
            })?
    }
}
