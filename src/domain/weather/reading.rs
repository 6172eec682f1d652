//! Weather reading value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sky condition as reported by the weather provider, lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Fog,
    /// Any other provider value (haze, smoke, ...), kept lowercase.
    Other(String),
}

impl WeatherCondition {
    /// Parses a provider value, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "clear" => WeatherCondition::Clear,
            "clouds" => WeatherCondition::Clouds,
            "rain" => WeatherCondition::Rain,
            "drizzle" => WeatherCondition::Drizzle,
            "thunderstorm" => WeatherCondition::Thunderstorm,
            "snow" => WeatherCondition::Snow,
            "mist" => WeatherCondition::Mist,
            "fog" => WeatherCondition::Fog,
            other => WeatherCondition::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            WeatherCondition::Clear => "clear",
            WeatherCondition::Clouds => "clouds",
            WeatherCondition::Rain => "rain",
            WeatherCondition::Drizzle => "drizzle",
            WeatherCondition::Thunderstorm => "thunderstorm",
            WeatherCondition::Snow => "snow",
            WeatherCondition::Mist => "mist",
            WeatherCondition::Fog => "fog",
            WeatherCondition::Other(value) => value,
        }
    }

    /// Rain or drizzle.
    pub fn is_wet(&self) -> bool {
        matches!(self, WeatherCondition::Rain | WeatherCondition::Drizzle)
    }

    /// Icon shown in the weather widget.
    pub fn icon_name(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Sun",
            WeatherCondition::Clouds => "Cloud",
            WeatherCondition::Rain => "CloudRain",
            WeatherCondition::Drizzle => "CloudDrizzle",
            WeatherCondition::Thunderstorm => "Zap",
            WeatherCondition::Snow => "Snowflake",
            WeatherCondition::Mist | WeatherCondition::Fog => "CloudFog",
            WeatherCondition::Other(_) => "Sun",
        }
    }
}

impl Default for WeatherCondition {
    fn default() -> Self {
        WeatherCondition::Clear
    }
}

impl From<String> for WeatherCondition {
    fn from(raw: String) -> Self {
        WeatherCondition::parse(&raw)
    }
}

impl From<WeatherCondition> for String {
    fn from(condition: WeatherCondition) -> Self {
        condition.as_str().to_string()
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the current weather at the user's location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Temperature in degrees Celsius, rounded.
    pub temperature_c: i32,
    pub condition: WeatherCondition,
    /// Human readable location label.
    pub location: String,
}

impl WeatherReading {
    pub fn new(temperature_c: i32, condition: WeatherCondition, location: impl Into<String>) -> Self {
        Self {
            temperature_c,
            condition,
            location: location.into(),
        }
    }

    /// Builds a reading from a raw provider temperature, rounding to whole degrees.
    pub fn from_raw(temperature_c: f64, condition: &str, location: impl Into<String>) -> Self {
        Self::new(
            temperature_c.round() as i32,
            WeatherCondition::parse(condition),
            location,
        )
    }
}
