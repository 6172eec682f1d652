//! Weather module - readings and the appropriateness filter.

mod appropriateness;
mod reading;

pub use appropriateness::{
    is_appropriate, suits_condition, tags_suit_weather, TemperatureBand, HEAVY_TAGS,
    HOT_WEATHER_TAGS, RAIN_SENSITIVE_TAGS, SUMMER_ONLY_TAGS, TRANSITIONAL_TAGS, WARM_TAGS,
};
pub use reading::{WeatherCondition, WeatherReading};
