//! HTTP adapter for the style persona quiz.

mod dto;
mod handlers;
mod routes;

pub use dto::{ClassifyPersonaRequest, PersonaResponse, QuizResponse};
pub use handlers::PersonaHandlers;
pub use routes::persona_routes;
