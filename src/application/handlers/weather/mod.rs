//! Weather resolution handler.

mod resolve_weather;

pub use resolve_weather::{ResolveWeatherHandler, ResolvedWeather, WeatherNotice};
