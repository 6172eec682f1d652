//! Persona module - the style quiz and its six personas.

mod catalog;
mod classifier;
mod quiz;

pub use catalog::StarterPack;
pub use classifier::{classify, persona_type_for, starter_packs_for, PersonaResult, PersonaType};
pub use quiz::{QuizAnswers, QuizOption, QuizQuestion, QUESTIONS, QUESTION_KEYS};
