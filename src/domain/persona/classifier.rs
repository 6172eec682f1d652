//! Persona classification from quiz answers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

use super::catalog::{profile, StarterPack};
use super::QuizAnswers;

/// The six style personas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonaType {
    DreamyRomantic,
    SereneMinimalist,
    BoldRebel,
    ArtsyVintageSoul,
    GlamorousSocialite,
    BalancedChic,
}

impl PersonaType {
    pub const ALL: [PersonaType; 6] = [
        PersonaType::DreamyRomantic,
        PersonaType::SereneMinimalist,
        PersonaType::BoldRebel,
        PersonaType::ArtsyVintageSoul,
        PersonaType::GlamorousSocialite,
        PersonaType::BalancedChic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaType::DreamyRomantic => "dreamy_romantic",
            PersonaType::SereneMinimalist => "serene_minimalist",
            PersonaType::BoldRebel => "bold_rebel",
            PersonaType::ArtsyVintageSoul => "artsy_vintage_soul",
            PersonaType::GlamorousSocialite => "glamorous_socialite",
            PersonaType::BalancedChic => "balanced_chic",
        }
    }

    /// Parses a type value, treating anything unrecognized as Balanced Chic.
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or(PersonaType::BalancedChic)
    }
}

impl fmt::Display for PersonaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonaType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PersonaType::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| ValidationError::invalid_format("persona_type", format!("unknown persona '{}'", s)))
    }
}

/// A classified persona with everything the result card shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonaResult {
    pub persona_type: PersonaType,
    pub title: String,
    pub emoji: String,
    pub description: String,
    pub aesthetic_tags: Vec<String>,
    pub starter_packs: Vec<StarterPack>,
}

impl PersonaResult {
    pub fn for_type(persona_type: PersonaType) -> Self {
        let p = profile(persona_type);
        Self {
            persona_type,
            title: p.title.to_string(),
            emoji: p.emoji.to_string(),
            description: p.description.to_string(),
            aesthetic_tags: p.tags.iter().map(|t| t.to_string()).collect(),
            starter_packs: p.starter_packs(),
        }
    }
}

/// Starter packs for a persona type value. Unknown values get Balanced Chic's.
pub fn starter_packs_for(type_value: &str) -> Vec<StarterPack> {
    profile(PersonaType::parse_or_default(type_value)).starter_packs()
}

/// Maps quiz answers to a persona type. First matching rule wins.
pub fn persona_type_for(answers: &QuizAnswers) -> PersonaType {
    let style = answers.style_preference.as_str();
    let palette = answers.color_palette.as_str();

    if style == "romantic" && palette == "pastels" {
        PersonaType::DreamyRomantic
    } else if style == "minimalist" && palette == "neutrals" {
        PersonaType::SereneMinimalist
    } else if style == "edgy" && palette == "monochrome" {
        PersonaType::BoldRebel
    } else if style == "vintage" || answers.inspiration == "art" {
        PersonaType::ArtsyVintageSoul
    } else if answers.lifestyle == "social" && palette == "jewel_tones" {
        PersonaType::GlamorousSocialite
    } else {
        PersonaType::BalancedChic
    }
}

/// Classifies quiz answers into a full persona result.
pub fn classify(answers: &QuizAnswers) -> PersonaResult {
    PersonaResult::for_type(persona_type_for(answers))
}
