//! Mock weather provider for testing and offline runs.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockWeatherProvider::new()
//!     .with_reading(WeatherReading::new(4, WeatherCondition::Snow, "Oslo"))
//!     .with_error(WeatherError::PermissionDenied);
//!
//! provider.current_weather().await?; // Oslo
//! provider.current_weather().await;  // Err(PermissionDenied), repeats from here on
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::weather::{WeatherCondition, WeatherReading};
use crate::ports::{WeatherError, WeatherProvider};

type MockResponse = Result<WeatherReading, WeatherError>;

/// Mock weather provider.
///
/// Queued responses are returned in order; the last one keeps repeating.
/// With nothing queued it reports a mild clear day.
#[derive(Debug, Clone)]
pub struct MockWeatherProvider {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    last: Arc<Mutex<Option<MockResponse>>>,
    delay: Duration,
    calls: Arc<Mutex<u32>>,
}

impl Default for MockWeatherProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockWeatherProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            last: Arc::new(Mutex::new(None)),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Queues a successful reading.
    pub fn with_reading(self, reading: WeatherReading) -> Self {
        self.push(Ok(reading))
    }

    /// Queues a failure.
    pub fn with_error(self, error: WeatherError) -> Self {
        self.push(Err(error))
    }

    /// Delays every call, for timeout tests.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of `current_weather` calls so far.
    pub fn call_count(&self) -> u32 {
        *self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(self, response: MockResponse) -> Self {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
        self
    }

    fn next_response(&self) -> MockResponse {
        let queued = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(response) = queued {
            *last = Some(response);
        }
        last.clone()
            .unwrap_or_else(|| Ok(WeatherReading::new(21, WeatherCondition::Clear, "Mockville")))
    }
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn current_weather(&self) -> Result<WeatherReading, WeatherError> {
        *self.calls.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        self.next_response()
    }
}
