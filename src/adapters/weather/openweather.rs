//! OpenWeather Provider - Implementation of WeatherProvider for OpenWeatherMap.
//!
//! Resolves coordinates through a `LocationProvider`, then calls the
//! current-weather endpoint in metric units.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenWeatherConfig::new(api_key)
//!     .with_base_url("https://api.openweathermap.org/data/2.5")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let provider = OpenWeatherProvider::new(config, Arc::new(location));
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::weather::WeatherReading;
use crate::ports::{Coordinates, LocationProvider, WeatherError, WeatherProvider};

/// Temperature used when the response carries none.
const MISSING_TEMPERATURE_C: f64 = 20.0;
const MISSING_CONDITION: &str = "clear";
const MISSING_LOCATION: &str = "Unknown";

/// Configuration for the OpenWeather provider.
#[derive(Debug, Clone)]
pub struct OpenWeatherConfig {
    api_key: Secret<String>,
    /// Base URL (default: https://api.openweathermap.org/data/2.5).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenWeatherConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://api.openweathermap.org/data/2.5".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenWeatherMap current-weather client.
pub struct OpenWeatherProvider {
    config: OpenWeatherConfig,
    location: Arc<dyn LocationProvider>,
    client: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: OpenWeatherConfig, location: Arc<dyn LocationProvider>) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        Self {
            config,
            location,
            client,
        }
    }

    fn weather_url(&self) -> String {
        format!("{}/weather", self.config.base_url)
    }

    async fn send_request(&self, coords: Coordinates) -> Result<Response, WeatherError> {
        self.client
            .get(self.weather_url())
            .query(&[
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
                ("appid", self.config.api_key().to_string()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    WeatherError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    WeatherError::service(format!("Connection failed: {}", e))
                } else {
                    WeatherError::service(e.to_string())
                }
            })
    }

    async fn parse_response(&self, response: Response) -> Result<WeatherReading, WeatherError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::service(format!(
                "Weather API request failed with status {}: {}",
                status, body
            )));
        }

        let body: OpenWeatherResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::service(format!("Failed to parse weather response: {}", e)))?;

        Ok(body.into_reading())
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self) -> Result<WeatherReading, WeatherError> {
        let coords = self.location.locate().await?;
        tracing::debug!(
            latitude = coords.latitude,
            longitude = coords.longitude,
            "fetching current weather"
        );
        let response = self.send_request(coords).await?;
        self.parse_response(response).await
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// OpenWeather API Types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Default, Deserialize)]
struct OpenWeatherResponse {
    #[serde(default)]
    main: Option<OpenWeatherMain>,
    #[serde(default)]
    weather: Vec<OpenWeatherCondition>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherMain {
    temp: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherCondition {
    main: Option<String>,
}

impl OpenWeatherResponse {
    fn into_reading(self) -> WeatherReading {
        let temperature = self
            .main
            .and_then(|m| m.temp)
            .unwrap_or(MISSING_TEMPERATURE_C);
        let condition = self
            .weather
            .into_iter()
            .next()
            .and_then(|w| w.main)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| MISSING_CONDITION.to_string());
        let location = self
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| MISSING_LOCATION.to_string());

        WeatherReading::from_raw(temperature, &condition, location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::weather::WeatherCondition;

    fn parse(json: &str) -> WeatherReading {
        serde_json::from_str::<OpenWeatherResponse>(json)
            .unwrap()
            .into_reading()
    }

    #[test]
    fn config_builder_works() {
        let config = OpenWeatherConfig::new("test-key")
            .with_base_url("http://localhost:9999/data/2.5/")
            .with_timeout(Duration::from_secs(3));

        assert_eq!(config.base_url, "http://localhost:9999/data/2.5");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn full_response_maps_to_reading() {
        let reading = parse(
            r#"{"main":{"temp":27.6},"weather":[{"main":"Rain"},{"main":"Mist"}],"name":"Lisbon"}"#,
        );
        assert_eq!(reading.temperature_c, 28);
        assert_eq!(reading.condition, WeatherCondition::Rain);
        assert_eq!(reading.location, "Lisbon");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let reading = parse("{}");
        assert_eq!(reading.temperature_c, 20);
        assert_eq!(reading.condition, WeatherCondition::Clear);
        assert_eq!(reading.location, "Unknown");
    }

    #[test]
    fn empty_name_is_unknown() {
        let reading = parse(r#"{"main":{"temp":-0.4},"weather":[],"name":""}"#);
        assert_eq!(reading.temperature_c, 0);
        assert_eq!(reading.location, "Unknown");
    }

    #[test]
    fn weather_url_appends_endpoint() {
        struct Nowhere;

        #[async_trait]
        impl LocationProvider for Nowhere {
            async fn locate(&self) -> Result<Coordinates, WeatherError> {
                Err(WeatherError::PositionUnavailable)
            }
        }

        let provider = OpenWeatherProvider::new(OpenWeatherConfig::new("k"), Arc::new(Nowhere));
        assert_eq!(
            provider.weather_url(),
            "https://api.openweathermap.org/data/2.5/weather"
        );
    }

    #[tokio::test]
    async fn location_failure_short_circuits() {
        struct Denied;

        #[async_trait]
        impl LocationProvider for Denied {
            async fn locate(&self) -> Result<Coordinates, WeatherError> {
                Err(WeatherError::PermissionDenied)
            }
        }

        let provider = OpenWeatherProvider::new(OpenWeatherConfig::new("k"), Arc::new(Denied));
        assert_eq!(
            provider.current_weather().await.unwrap_err(),
            WeatherError::PermissionDenied
        );
    }
}
