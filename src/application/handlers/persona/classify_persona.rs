//! ClassifyPersonaHandler - style quiz scoring.

use std::collections::HashMap;

use crate::domain::foundation::ValidationError;
use crate::domain::persona::{classify, PersonaResult, QuizAnswers, QuizQuestion, QUESTIONS};

/// Command carrying one answer per quiz question, keyed by question id.
#[derive(Debug, Clone, Default)]
pub struct ClassifyPersonaCommand {
    pub answers: HashMap<String, String>,
}

/// Handler for the style quiz. Pure; holds no ports.
#[derive(Debug, Default)]
pub struct ClassifyPersonaHandler;

impl ClassifyPersonaHandler {
    pub fn new() -> Self {
        Self
    }

    /// The quiz, in the order it is asked.
    pub fn questions(&self) -> &'static [QuizQuestion] {
        &QUESTIONS
    }

    /// # Errors
    ///
    /// `EmptyField` naming the first unanswered question.
    pub fn handle(&self, cmd: ClassifyPersonaCommand) -> Result<PersonaResult, ValidationError> {
        let answers = QuizAnswers::from_map(&cmd.answers)?;
        let result = classify(&answers);
        tracing::debug!(persona = result.persona_type.as_str(), "persona classified");
        Ok(result)
    }
}
