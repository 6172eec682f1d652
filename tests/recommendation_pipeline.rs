//! End-to-end tests for the look-of-the-day pipeline over the seeded closet.
//!
//! These run the real in-memory store (without latency) and a mock weather
//! provider through weather resolution, candidate queries, selection and
//! captioning.

use std::sync::Arc;
use std::time::Duration;

use lookbook::adapters::memory::{InMemoryOutfitStore, Latency};
use lookbook::adapters::weather::MockWeatherProvider;
use lookbook::application::{
    LookOfTheDayHandler, ResolveWeatherHandler, TodayView, EMPTY_CLOSET_MESSAGE,
};
use lookbook::domain::weather::{is_appropriate, WeatherCondition, WeatherReading};
use lookbook::ports::WeatherError;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn fallback() -> WeatherReading {
    WeatherReading::new(22, WeatherCondition::Clear, "Default Location")
}

fn weather_handler(provider: MockWeatherProvider) -> Arc<ResolveWeatherHandler> {
    Arc::new(ResolveWeatherHandler::new(
        Arc::new(provider),
        Duration::from_secs(2),
        fallback(),
    ))
}

fn seeded_store() -> Arc<InMemoryOutfitStore> {
    Arc::new(InMemoryOutfitStore::seeded(Latency::none()).unwrap())
}

fn handler_for(reading: WeatherReading, seed: u64) -> LookOfTheDayHandler {
    let weather = weather_handler(MockWeatherProvider::new().with_reading(reading));
    LookOfTheDayHandler::new(weather, seeded_store()).with_seed(seed)
}

// =============================================================================
// Pipeline
// =============================================================================

#[tokio::test]
async fn snowy_day_picks_only_warm_outfits() {
    let reading = WeatherReading::new(-2, WeatherCondition::Snow, "Oslo");

    for seed in 0..8 {
        let result = handler_for(reading.clone(), seed).handle().await.unwrap();
        let outfit = result.look.outfit.expect("cold band has a coat in the seed closet");

        assert!(is_appropriate(&outfit, &reading));
        assert!(outfit.tags.contains("coat") || outfit.tags.contains("winter"));
        assert!(result.look.weather_smart);
        assert!(result.look.notice.is_none());
    }
}

#[tokio::test]
async fn hot_day_candidates_come_from_temperature_band() {
    let reading = WeatherReading::new(31, WeatherCondition::Clear, "Seville");
    let result = handler_for(reading.clone(), 7).handle().await.unwrap();

    assert!(!result.candidates.is_empty());
    assert!(result
        .candidates
        .iter()
        .all(|o| is_appropriate(o, &reading)));
    assert_eq!(result.look.pool_size, result.candidates.len());
}

#[tokio::test]
async fn mild_rain_falls_through_to_condition_query() {
    let reading = WeatherReading::new(22, WeatherCondition::Rain, "Bergen");
    let result = handler_for(reading, 3).handle().await.unwrap();

    // The mild band has no signature tags, so the condition query supplies
    // the pool and drops rain-sensitive pieces.
    assert!(!result.candidates.is_empty());
    assert!(result
        .candidates
        .iter()
        .all(|o| !o.tags.contains("white") && !o.tags.contains("light")));
}

#[tokio::test]
async fn denied_location_uses_fallback_and_whole_closet() {
    let weather = weather_handler(MockWeatherProvider::new().with_error(WeatherError::PermissionDenied));
    let store = seeded_store();
    let handler = LookOfTheDayHandler::new(weather, store).with_seed(11);

    let result = handler.handle().await.unwrap();

    assert_eq!(result.look.weather, fallback());
    assert!(!result.look.weather_smart);
    assert_eq!(result.look.notice.as_ref().unwrap().kind, "permission_denied");
    assert_eq!(result.candidates.len(), 10);
    assert!(result.look.outfit.is_some());
}

#[tokio::test]
async fn slow_weather_times_out_to_fallback() {
    let provider = MockWeatherProvider::new().with_delay(Duration::from_secs(5));
    let weather = Arc::new(ResolveWeatherHandler::new(
        Arc::new(provider),
        Duration::from_millis(20),
        fallback(),
    ));

    let resolved = weather.handle().await;
    assert!(!resolved.is_live());
    assert_eq!(resolved.notice.unwrap().kind, "timeout");
}

#[tokio::test]
async fn empty_closet_reports_empty_state() {
    let weather = weather_handler(MockWeatherProvider::new());
    let handler = LookOfTheDayHandler::new(
        weather,
        Arc::new(InMemoryOutfitStore::new(Latency::none())),
    );

    let result = handler.handle().await.unwrap();
    assert!(result.look.outfit.is_none());
    assert_eq!(result.look.caption, EMPTY_CLOSET_MESSAGE);
    assert_eq!(result.look.pool_size, 0);
}

// =============================================================================
// Today view
// =============================================================================

#[tokio::test]
async fn shuffle_reuses_pool_without_refetching() {
    let provider = MockWeatherProvider::new()
        .with_reading(WeatherReading::new(3, WeatherCondition::Clear, "Oslo"));
    let calls = provider.clone();
    let handler = LookOfTheDayHandler::new(weather_handler(provider), seeded_store()).with_seed(1);
    let view = TodayView::new(Arc::new(handler));

    assert!(view.shuffle().is_none());

    let first = view.refresh().await.unwrap();
    assert!(first.applied);

    for _ in 0..5 {
        let shuffled = view.shuffle().unwrap();
        assert_eq!(shuffled.pool_size, first.look.pool_size);
        assert_eq!(view.current().unwrap(), shuffled);
    }
    assert_eq!(calls.call_count(), 1);
}
