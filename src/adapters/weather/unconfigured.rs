//! Weather provider used when no service credentials are configured.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use std::sync::Arc;

use crate::config::WeatherConfig;
use crate::domain::weather::WeatherReading;
use crate::ports::{WeatherError, WeatherProvider};

use super::{ConfiguredLocation, OpenWeatherConfig, OpenWeatherProvider};

/// Always fails with a service error, so callers fall back to the
/// configured reading and tell the user.
#[derive(Debug, Clone, Default)]
pub struct UnconfiguredWeatherProvider;

#[async_trait]
impl WeatherProvider for UnconfiguredWeatherProvider {
    async fn current_weather(&self) -> Result<WeatherReading, WeatherError> {
        Err(WeatherError::service("no weather API key configured"))
    }
}

/// Live OpenWeather when an API key is configured, otherwise a provider
/// that reports the service as unavailable.
pub fn weather_provider(config: &WeatherConfig) -> Arc<dyn WeatherProvider> {
    match config.api_key() {
        Some(key) => {
            let location = ConfiguredLocation::new(config.coordinates(), config.location_enabled);
            let client_config = OpenWeatherConfig::new(key.expose_secret().clone())
                .with_base_url(config.base_url.clone())
                .with_timeout(config.timeout());
            tracing::info!(base_url = %client_config.base_url, "Using OpenWeather provider");
            Arc::new(OpenWeatherProvider::new(client_config, Arc::new(location)))
        }
        None => {
            tracing::warn!("No weather API key configured; suggestions use the fallback reading");
            Arc::new(UnconfiguredWeatherProvider)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ResolveWeatherHandler;

    #[tokio::test]
    async fn unconfigured_provider_reports_service_error() {
        let err = UnconfiguredWeatherProvider.current_weather().await.unwrap_err();
        assert_eq!(err.kind(), "service_error");
    }

    #[tokio::test]
    async fn default_config_resolves_to_fallback_with_notice() {
        let config = WeatherConfig::default();
        let handler = ResolveWeatherHandler::new(
            weather_provider(&config),
            config.timeout(),
            config.fallback_reading(),
        );

        let resolved = handler.handle().await;

        assert!(!resolved.is_live());
        assert!(resolved.live_reading().is_none());
        assert_eq!(resolved.reading, config.fallback_reading());
        assert_eq!(resolved.notice.map(|n| n.kind), Some("service_error"));
    }

    #[tokio::test]
    async fn blank_api_key_counts_as_unconfigured() {
        let config = WeatherConfig {
            api_key: Some("   ".to_string()),
            ..WeatherConfig::default()
        };
        let resolved = ResolveWeatherHandler::new(
            weather_provider(&config),
            config.timeout(),
            config.fallback_reading(),
        )
        .handle()
        .await;

        assert_eq!(resolved.notice.map(|n| n.kind), Some("service_error"));
    }
}
