//! Caption lines for the look of the day.
//!
//! Weather lines take precedence when a live reading exists. Otherwise the
//! outfit's first tag picks a style theme, falling back to the default set.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::outfit::Outfit;
use crate::domain::weather::WeatherReading;

/// Shown while no outfit has been selected yet.
pub const LOADING_CAPTION: &str = "Loading your fabulous look! ✨";

const TEMP_PLACEHOLDER: &str = "{temp}";

const RAINY_LINES: [&str; 3] = [
    "Rain-ready and runway-ready! Perfect for today's {temp}°C weather! ☔✨",
    "Drizzle-proof diva energy at {temp}°C! You'll slay through any storm! 🌧️💪",
    "Weather might be gloomy at {temp}°C, but your style is sunshine! 🌈",
];

const HOT_LINES: [&str; 3] = [
    "Perfect for this {temp}°C weather! Stay cool and chic! ☀️",
    "Weather-approved gorgeousness for {temp}°C! 🌡️✨",
    "Hot weather, hotter look! Perfect for today's {temp}°C! 🔥",
];

const COLD_LINES: [&str; 3] = [
    "Cozy chic for this chilly {temp}°C day! ❄️✨",
    "Bundled up and beautiful for {temp}°C! 🧥💖",
    "Cold weather fashion icon vibes at {temp}°C! 🌨️",
];

const MILD_LINES: [&str; 3] = [
    "Ideal for today's lovely {temp}°C weather! 🌤️",
    "Weather gods are smiling - perfect outfit for {temp}°C! ✨",
    "Comfort meets style in this {temp}°C weather! 💕",
];

const DEFAULT_LINES: [&str; 5] = [
    "Looking absolutely gorgeous today! 💖",
    "Main character energy activated! ✨",
    "You're serving looks and I'm here for it! 🔥",
    "Outfit perfection achieved! 👑",
    "Style icon status: CONFIRMED! ⭐",
];

/// Weather theme for a caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherMood {
    Rainy,
    Hot,
    Cold,
    Mild,
}

impl WeatherMood {
    /// Rain beats temperature; then hot (>25), cold (<10), mild.
    pub fn of(reading: &WeatherReading) -> Self {
        if reading.condition.is_wet() {
            WeatherMood::Rainy
        } else if reading.temperature_c > 25 {
            WeatherMood::Hot
        } else if reading.temperature_c < 10 {
            WeatherMood::Cold
        } else {
            WeatherMood::Mild
        }
    }

    fn templates(&self) -> &'static [&'static str] {
        match self {
            WeatherMood::Rainy => &RAINY_LINES,
            WeatherMood::Hot => &HOT_LINES,
            WeatherMood::Cold => &COLD_LINES,
            WeatherMood::Mild => &MILD_LINES,
        }
    }

    /// All lines of the theme rendered for a temperature.
    pub fn lines(&self, temperature_c: i32) -> Vec<String> {
        self.templates()
            .iter()
            .map(|t| render(t, temperature_c))
            .collect()
    }
}

/// Style theme keyed off an outfit tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleTheme {
    Coquette,
    Y2k,
    Cottagecore,
    Streetwear,
    Glam,
    Vintage,
}

impl StyleTheme {
    /// Themes in matching order.
    pub const ALL: [StyleTheme; 6] = [
        StyleTheme::Coquette,
        StyleTheme::Y2k,
        StyleTheme::Cottagecore,
        StyleTheme::Streetwear,
        StyleTheme::Glam,
        StyleTheme::Vintage,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            StyleTheme::Coquette => "coquette",
            StyleTheme::Y2k => "y2k",
            StyleTheme::Cottagecore => "cottagecore",
            StyleTheme::Streetwear => "streetwear",
            StyleTheme::Glam => "glam",
            StyleTheme::Vintage => "vintage",
        }
    }

    pub fn lines(&self) -> &'static [&'static str; 3] {
        match self {
            StyleTheme::Coquette => &[
                "Serving soft girl realness 🌸",
                "You're giving princess vibes today! 👑",
                "Coquette queen energy activated! 🎀",
            ],
            StyleTheme::Y2k => &[
                "You're giving early 2000s romcom queen 💄👠",
                "Bringing back the Y2K magic! ✨",
                "Total butterfly clip princess vibes! 🦋",
            ],
            StyleTheme::Cottagecore => &[
                "Forest fairy aesthetic on point! 🌿",
                "Cottage living your best life! 🏡",
                "Giving main character in a cozy novel! 📚",
            ],
            StyleTheme::Streetwear => &[
                "Street style icon status unlocked! 🔥",
                "Urban princess energy! 👟",
                "Casual but make it fashion! ✨",
            ],
            StyleTheme::Glam => &[
                "Absolutely stunning! Red carpet ready! 💎",
                "Glamour goddess mode activated! ✨",
                "You're literally glowing! 🌟",
            ],
            StyleTheme::Vintage => &[
                "Retro queen serving looks! 👗",
                "Time travel chic! Love it! 🕰️",
                "Old Hollywood glamour vibes! 🎭",
            ],
        }
    }

    /// First theme whose keyword contains the tag or is contained by it.
    pub fn matching(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|theme| tag.contains(theme.keyword()) || theme.keyword().contains(&tag))
    }
}

/// The default caption lines used when no theme matches.
pub fn default_lines() -> &'static [&'static str] {
    &DEFAULT_LINES
}

/// Picks a caption for the outfit.
///
/// `weather` is the live reading; pass `None` when weather is unavailable
/// or only a fallback reading exists.
pub fn caption<R>(outfit: Option<&Outfit>, weather: Option<&WeatherReading>, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let Some(outfit) = outfit else {
        return LOADING_CAPTION.to_string();
    };

    if let Some(reading) = weather {
        let mood = WeatherMood::of(reading);
        return pick(mood.templates(), rng)
            .map(|t| render(t, reading.temperature_c))
            .unwrap_or_default();
    }

    let lines: &[&str] = match outfit.tags.first().and_then(StyleTheme::matching) {
        Some(theme) => theme.lines(),
        None => &DEFAULT_LINES,
    };
    pick(lines, rng).map(str::to_string).unwrap_or_default()
}

fn pick<'a, R: Rng + ?Sized>(lines: &[&'a str], rng: &mut R) -> Option<&'a str> {
    lines.choose(rng).copied()
}

fn render(template: &str, temperature_c: i32) -> String {
    template.replace(TEMP_PLACEHOLDER, &temperature_c.to_string())
}
