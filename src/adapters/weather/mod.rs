//! Weather adapters.
//!
//! - `OpenWeatherProvider` - live conditions from OpenWeatherMap
//! - `ConfiguredLocation` - coordinates from configuration
//! - `UnconfiguredWeatherProvider` - stands in when no API key is set
//! - `MockWeatherProvider` - queued readings for tests

mod configured_location;
mod mock;
mod openweather;
mod unconfigured;

pub use configured_location::ConfiguredLocation;
pub use mock::MockWeatherProvider;
pub use openweather::{OpenWeatherConfig, OpenWeatherProvider};
pub use unconfigured::{weather_provider, UnconfiguredWeatherProvider};
