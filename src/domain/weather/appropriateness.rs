//! Weather-appropriateness filter.
//!
//! Decides whether an outfit suits a weather reading using its style tags.
//! Temperature bands are checked first; the rain check only applies when no
//! temperature rule claimed the reading (the 20–25 °C band).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::TagSet;
use crate::domain::outfit::Outfit;

use super::{WeatherCondition, WeatherReading};

/// Tags that make an outfit right for the cold.
pub const WARM_TAGS: &[&str] = &["winter", "coat", "warm", "cozy", "sweater"];

/// Tags that suit transitional, cool weather.
pub const TRANSITIONAL_TAGS: &[&str] = &["fall", "autumn", "layered", "jacket", "casual"];

/// Tags that are too light for cool weather.
pub const SUMMER_ONLY_TAGS: &[&str] = &["summer", "beach", "tank", "shorts"];

/// Tags that suit the heat.
pub const HOT_WEATHER_TAGS: &[&str] = &["summer", "light", "beach", "tank", "shorts", "sundress"];

/// Tags that are too heavy for the heat.
pub const HEAVY_TAGS: &[&str] = &["winter", "coat", "heavy", "sweater"];

/// Tags for pieces that rain would ruin.
pub const RAIN_SENSITIVE_TAGS: &[&str] = &["white", "light", "delicate"];

/// Temperature band a reading falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    /// Below 10 °C.
    Cold,
    /// 10 °C up to (not including) 20 °C.
    Cool,
    /// 20 °C through 25 °C inclusive; no temperature rule applies.
    Mild,
    /// Above 25 °C.
    Hot,
}

impl TemperatureBand {
    pub fn of(temperature_c: i32) -> Self {
        if temperature_c < 10 {
            TemperatureBand::Cold
        } else if temperature_c < 20 {
            TemperatureBand::Cool
        } else if temperature_c > 25 {
            TemperatureBand::Hot
        } else {
            TemperatureBand::Mild
        }
    }

    /// Tags that positively identify an outfit for this band.
    ///
    /// The mild band has none, so a band lookup there finds nothing.
    pub fn signature_tags(&self) -> &'static [&'static str] {
        match self {
            TemperatureBand::Cold => WARM_TAGS,
            TemperatureBand::Cool => TRANSITIONAL_TAGS,
            TemperatureBand::Mild => &[],
            TemperatureBand::Hot => HOT_WEATHER_TAGS,
        }
    }

    /// Temperature verdict for the tags, or None when the band has no rule.
    fn verdict(&self, tags: &TagSet) -> Option<bool> {
        match self {
            TemperatureBand::Cold => Some(tags.intersects(WARM_TAGS)),
            TemperatureBand::Cool => {
                Some(tags.intersects(TRANSITIONAL_TAGS) || !tags.intersects(SUMMER_ONLY_TAGS))
            }
            TemperatureBand::Hot => {
                Some(tags.intersects(HOT_WEATHER_TAGS) || !tags.intersects(HEAVY_TAGS))
            }
            TemperatureBand::Mild => None,
        }
    }
}

/// True when the tags survive the sky condition.
pub fn suits_condition(tags: &TagSet, condition: &WeatherCondition) -> bool {
    if condition.is_wet() {
        return !tags.intersects(RAIN_SENSITIVE_TAGS);
    }
    true
}

/// True when the outfit is appropriate for the weather.
pub fn is_appropriate(outfit: &Outfit, weather: &WeatherReading) -> bool {
    tags_suit_weather(&outfit.tags, weather)
}

/// Tag-level form of [`is_appropriate`].
pub fn tags_suit_weather(tags: &TagSet, weather: &WeatherReading) -> bool {
    match TemperatureBand::of(weather.temperature_c).verdict(tags) {
        Some(verdict) => verdict,
        None => suits_condition(tags, &weather.condition),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tags(list: &[&str]) -> TagSet {
        TagSet::from_tags(list.iter().copied())
    }

    fn weather(temp: i32, condition: WeatherCondition) -> WeatherReading {
        WeatherReading::new(temp, condition, "Test City")
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(TemperatureBand::of(9), TemperatureBand::Cold);
        assert_eq!(TemperatureBand::of(10), TemperatureBand::Cool);
        assert_eq!(TemperatureBand::of(19), TemperatureBand::Cool);
        assert_eq!(TemperatureBand::of(20), TemperatureBand::Mild);
        assert_eq!(TemperatureBand::of(25), TemperatureBand::Mild);
        assert_eq!(TemperatureBand::of(26), TemperatureBand::Hot);
    }

    #[test]
    fn cold_requires_warm_tags() {
        let cold = weather(2, WeatherCondition::Clear);
        assert!(tags_suit_weather(&tags(&["cozy"]), &cold));
        assert!(!tags_suit_weather(&tags(&["glam"]), &cold));
        assert!(!tags_suit_weather(&TagSet::new(), &cold));
    }

    #[test]
    fn cool_rejects_summer_only_pieces() {
        let cool = weather(15, WeatherCondition::Clouds);
        assert!(tags_suit_weather(&tags(&["glam"]), &cool));
        assert!(!tags_suit_weather(&tags(&["shorts"]), &cool));
        assert!(tags_suit_weather(&tags(&["shorts", "layered"]), &cool));
    }

    #[test]
    fn hot_rejects_heavy_pieces() {
        let hot = weather(31, WeatherCondition::Clear);
        assert!(!tags_suit_weather(&tags(&["coat"]), &hot));
        assert!(tags_suit_weather(&tags(&["coat", "light"]), &hot));
        assert!(tags_suit_weather(&TagSet::new(), &hot));
    }

    #[test]
    fn temperature_rules_win_over_rain() {
        // A cool-band verdict is final even when it rains.
        let cool_rain = weather(12, WeatherCondition::Rain);
        assert!(tags_suit_weather(&tags(&["white"]), &cool_rain));
    }

    #[test]
    fn mild_rain_rejects_delicate_pieces() {
        let mild_rain = weather(22, WeatherCondition::Drizzle);
        assert!(!tags_suit_weather(&tags(&["delicate"]), &mild_rain));
        assert!(!tags_suit_weather(&tags(&["LIGHT"]), &mild_rain));
        assert!(tags_suit_weather(&tags(&["streetwear"]), &mild_rain));
    }

    #[test]
    fn mild_dry_weather_passes_everything() {
        let mild = weather(23, WeatherCondition::Clouds);
        assert!(tags_suit_weather(&tags(&["white", "coat"]), &mild));
    }

    #[test]
    fn mild_band_has_no_signature_tags() {
        assert!(TemperatureBand::Mild.signature_tags().is_empty());
        assert_eq!(TemperatureBand::Cold.signature_tags(), WARM_TAGS);
    }

    fn condition_strategy() -> impl Strategy<Value = WeatherCondition> {
        prop_oneof![
            Just(WeatherCondition::Clear),
            Just(WeatherCondition::Clouds),
            Just(WeatherCondition::Rain),
            Just(WeatherCondition::Drizzle),
            Just(WeatherCondition::Snow),
            Just(WeatherCondition::Fog),
        ]
    }

    proptest! {
        #[test]
        fn winter_outfits_always_suit_the_cold(temp in -40i32..10, extra in "[a-z]{0,8}", condition in condition_strategy()) {
            let set = tags(&["winter", extra.as_str()]);
            prop_assert!(tags_suit_weather(&set, &weather(temp, condition)));
        }

        #[test]
        fn summer_tank_outfits_always_suit_the_heat(temp in 26i32..50, condition in condition_strategy()) {
            let set = tags(&["summer", "tank"]);
            prop_assert!(tags_suit_weather(&set, &weather(temp, condition)));
        }

        #[test]
        fn untagged_outfits_pass_dry_mild_weather(temp in 20i32..=25) {
            for condition in [WeatherCondition::Clear, WeatherCondition::Clouds, WeatherCondition::Snow] {
                prop_assert!(tags_suit_weather(&TagSet::new(), &weather(temp, condition)));
            }
        }

        #[test]
        fn tag_case_never_changes_the_verdict(temp in -10i32..40, tag in "[a-z]{1,10}", condition in condition_strategy()) {
            let lower = tags(&[tag.as_str()]);
            let upper = tags(&[tag.to_uppercase().as_str()]);
            let reading = weather(temp, condition);
            prop_assert_eq!(tags_suit_weather(&lower, &reading), tags_suit_weather(&upper, &reading));
        }
    }
}
