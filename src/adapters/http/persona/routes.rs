//! HTTP routes for the style quiz.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{classify_persona, quiz, PersonaHandlers};

/// Creates the persona router. Paths are relative to `/api`.
pub fn persona_routes(handlers: PersonaHandlers) -> Router {
    Router::new()
        .route("/persona/quiz", get(quiz))
        .route("/persona", post(classify_persona))
        .with_state(handlers)
}
