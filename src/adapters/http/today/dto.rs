//! Response DTOs for the today page and the weather widget.

use serde::{Deserialize, Serialize};

use crate::adapters::http::closet::OutfitResponse;
use crate::application::handlers::today::LookOfTheDay;
use crate::application::handlers::weather::{ResolvedWeather, WeatherNotice};
use crate::domain::weather::WeatherReading;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeResponse {
    pub kind: String,
    pub message: String,
}

impl From<WeatherNotice> for NoticeResponse {
    fn from(notice: WeatherNotice) -> Self {
        Self {
            kind: notice.kind.to_string(),
            message: notice.message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub temperature_c: i32,
    pub condition: String,
    /// Icon key for the widget, e.g. "sun" or "cloud-rain".
    pub icon: String,
    pub location: String,
}

impl From<WeatherReading> for WeatherResponse {
    fn from(reading: WeatherReading) -> Self {
        Self {
            temperature_c: reading.temperature_c,
            condition: reading.condition.as_str().to_string(),
            icon: reading.condition.icon_name().to_string(),
            location: reading.location,
        }
    }
}

/// GET /api/weather
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeatherResponse {
    pub weather: WeatherResponse,
    /// False when the fallback reading is shown.
    pub live: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<NoticeResponse>,
}

impl From<ResolvedWeather> for CurrentWeatherResponse {
    fn from(resolved: ResolvedWeather) -> Self {
        Self {
            live: resolved.is_live(),
            weather: resolved.reading.into(),
            notice: resolved.notice.map(Into::into),
        }
    }
}

/// GET /api/today and POST /api/today/shuffle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayResponse {
    pub headline: String,
    pub caption: String,
    /// Absent when the closet is empty.
    pub outfit: Option<OutfitResponse>,
    pub weather: WeatherResponse,
    pub weather_smart: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<NoticeResponse>,
    pub pool_size: usize,
}

impl From<LookOfTheDay> for TodayResponse {
    fn from(look: LookOfTheDay) -> Self {
        Self {
            headline: look.headline().to_string(),
            caption: look.caption,
            outfit: look.outfit.map(Into::into),
            weather: look.weather.into(),
            weather_smart: look.weather_smart,
            notice: look.notice.map(Into::into),
            pool_size: look.pool_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::today::EMPTY_CLOSET_MESSAGE;
    use crate::domain::weather::WeatherCondition;
    use crate::ports::WeatherError;

    #[test]
    fn weather_response_carries_icon() {
        let response = WeatherResponse::from(WeatherReading::new(12, WeatherCondition::Rain, "Leeds"));
        assert_eq!(response.icon, WeatherCondition::Rain.icon_name());
        assert_eq!(response.location, "Leeds");
    }

    #[test]
    fn fallback_weather_is_not_live() {
        let resolved = ResolvedWeather {
            reading: WeatherReading::new(22, WeatherCondition::Clear, "Default Location"),
            notice: Some(WeatherNotice::for_error(&WeatherError::PermissionDenied)),
        };
        let response = CurrentWeatherResponse::from(resolved);
        assert!(!response.live);
        assert_eq!(response.notice.unwrap().kind, "permission_denied");
    }

    #[test]
    fn empty_state_serializes_null_outfit() {
        let look = LookOfTheDay {
            outfit: None,
            caption: EMPTY_CLOSET_MESSAGE.to_string(),
            weather: WeatherReading::new(22, WeatherCondition::Clear, "Mockville"),
            weather_smart: false,
            notice: None,
            pool_size: 0,
        };
        let json = serde_json::to_value(TodayResponse::from(look)).unwrap();
        assert!(json["outfit"].is_null());
        assert_eq!(json["caption"], EMPTY_CLOSET_MESSAGE);
        assert!(json.get("notice").is_none());
    }
}
