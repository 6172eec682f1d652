//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory outfit and moodboard stores with simulated latency
//! - `weather` - OpenWeatherMap client, configured location, mock provider
//! - `http` - Axum REST API

pub mod http;
pub mod memory;
pub mod weather;
