//! Style quiz questions and answers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::ValidationError;

/// Question keys, in the order the quiz asks them.
pub const QUESTION_KEYS: [&str; 4] = ["style_preference", "color_palette", "lifestyle", "inspiration"];

/// One selectable answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// One quiz question with its four options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub id: &'static str,
    pub title: &'static str,
    pub emoji: &'static str,
    pub options: [QuizOption; 4],
}

const fn option(value: &'static str, label: &'static str, description: &'static str) -> QuizOption {
    QuizOption {
        value,
        label,
        description,
    }
}

/// The full quiz.
pub const QUESTIONS: [QuizQuestion; 4] = [
    QuizQuestion {
        id: "style_preference",
        title: "What style speaks to your soul?",
        emoji: "✨",
        options: [
            option("minimalist", "Clean & Minimal", "Less is more vibes"),
            option("romantic", "Soft & Romantic", "Dreamy feminine energy"),
            option("edgy", "Bold & Edgy", "Statement making looks"),
            option("vintage", "Vintage & Retro", "Timeless classic pieces"),
        ],
    },
    QuizQuestion {
        id: "color_palette",
        title: "Which color palette makes your heart skip?",
        emoji: "🎨",
        options: [
            option("pastels", "Soft Pastels", "Baby pink, lavender, mint"),
            option("neutrals", "Warm Neutrals", "Beige, cream, camel"),
            option("jewel_tones", "Rich Jewel Tones", "Emerald, sapphire, ruby"),
            option("monochrome", "Classic Monochrome", "Black, white, grey"),
        ],
    },
    QuizQuestion {
        id: "lifestyle",
        title: "What describes your lifestyle best?",
        emoji: "💫",
        options: [
            option("creative", "Creative & Artistic", "Museums, cafes, inspiration"),
            option("professional", "Professional & Polished", "Meetings, networking, success"),
            option("casual", "Relaxed & Comfortable", "Cozy days, simple pleasures"),
            option("social", "Social & Adventurous", "Events, travel, experiences"),
        ],
    },
    QuizQuestion {
        id: "inspiration",
        title: "What inspires your fashion choices?",
        emoji: "🌙",
        options: [
            option("nature", "Nature & Seasons", "Earth tones, organic textures"),
            option("art", "Art & Culture", "Museums, galleries, creativity"),
            option("travel", "Travel & Adventure", "Global influences, wanderlust"),
            option("mood", "Emotions & Mood", "How I feel in the moment"),
        ],
    },
];

/// One answer per question. Values are free strings; unknown values simply
/// fail to match any persona rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswers {
    pub style_preference: String,
    pub color_palette: String,
    pub lifestyle: String,
    pub inspiration: String,
}

impl QuizAnswers {
    pub fn new(
        style_preference: impl Into<String>,
        color_palette: impl Into<String>,
        lifestyle: impl Into<String>,
        inspiration: impl Into<String>,
    ) -> Self {
        Self {
            style_preference: normalize(style_preference.into()),
            color_palette: normalize(color_palette.into()),
            lifestyle: normalize(lifestyle.into()),
            inspiration: normalize(inspiration.into()),
        }
    }

    /// Builds answers from a key/value map. Every question key must be present.
    pub fn from_map(answers: &HashMap<String, String>) -> Result<Self, ValidationError> {
        let get = |key: &str| {
            answers
                .get(key)
                .filter(|v| !v.trim().is_empty())
                .cloned()
                .ok_or_else(|| ValidationError::empty_field(key))
        };
        Ok(Self::new(
            get("style_preference")?,
            get("color_palette")?,
            get("lifestyle")?,
            get("inspiration")?,
        ))
    }
}

fn normalize(value: String) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questions_follow_key_order() {
        let ids: Vec<&str> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids, QUESTION_KEYS);
    }

    #[test]
    fn from_map_requires_every_key() {
        let mut map = HashMap::new();
        map.insert("style_preference".to_string(), "edgy".to_string());
        map.insert("color_palette".to_string(), "monochrome".to_string());
        map.insert("lifestyle".to_string(), "social".to_string());

        let err = QuizAnswers::from_map(&map).unwrap_err();
        assert_eq!(err.field(), "inspiration");

        map.insert("inspiration".to_string(), " Travel ".to_string());
        let answers = QuizAnswers::from_map(&map).unwrap();
        assert_eq!(answers.inspiration, "travel");
    }
}
