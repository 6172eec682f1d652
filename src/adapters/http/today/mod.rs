//! HTTP adapter for the look of the day and the weather widget.

mod dto;
mod handlers;
mod routes;

pub use dto::{CurrentWeatherResponse, NoticeResponse, TodayResponse, WeatherResponse};
pub use handlers::TodayHandlers;
pub use routes::today_routes;
