//! Recommendation module - choosing and captioning the look of the day.

mod commentary;
mod selector;

pub use commentary::{caption, default_lines, StyleTheme, WeatherMood, LOADING_CAPTION};
pub use selector::{pick_outfit, weather_appropriate};
