//! DTOs for the style quiz.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::persona::{PersonaResult, QuizQuestion, StarterPack};

/// GET /api/persona/quiz
#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
}

/// POST /api/persona - question id to chosen option value
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyPersonaRequest {
    pub answers: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonaResponse {
    #[serde(rename = "type")]
    pub persona_type: String,
    pub title: String,
    pub emoji: String,
    pub description: String,
    pub aesthetic_tags: Vec<String>,
    pub starter_packs: Vec<StarterPack>,
}

impl From<PersonaResult> for PersonaResponse {
    fn from(result: PersonaResult) -> Self {
        Self {
            persona_type: result.persona_type.as_str().to_string(),
            title: result.title,
            emoji: result.emoji,
            description: result.description,
            aesthetic_tags: result.aesthetic_tags,
            starter_packs: result.starter_packs,
        }
    }
}
