//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `OutfitRepository` - the closet store, including planning entries
//! - `MoodboardRepository` - moodboard persistence
//! - `WeatherProvider` / `LocationProvider` - current conditions

mod moodboard_repository;
mod outfit_repository;
mod weather_provider;

pub use moodboard_repository::MoodboardRepository;
pub use outfit_repository::OutfitRepository;
pub use weather_provider::{Coordinates, LocationProvider, WeatherError, WeatherProvider};
