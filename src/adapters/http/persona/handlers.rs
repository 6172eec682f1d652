//! HTTP handlers for the style quiz.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::persona::{ClassifyPersonaCommand, ClassifyPersonaHandler};

use super::dto::{ClassifyPersonaRequest, PersonaResponse, QuizResponse};

#[derive(Clone)]
pub struct PersonaHandlers {
    classify_handler: Arc<ClassifyPersonaHandler>,
}

impl PersonaHandlers {
    pub fn new(classify_handler: Arc<ClassifyPersonaHandler>) -> Self {
        Self { classify_handler }
    }
}

/// GET /api/persona/quiz - Questions in order
pub async fn quiz(State(handlers): State<PersonaHandlers>) -> Response {
    let response = QuizResponse {
        questions: handlers.classify_handler.questions().to_vec(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/persona - Score a completed quiz
pub async fn classify_persona(
    State(handlers): State<PersonaHandlers>,
    Json(req): Json<ClassifyPersonaRequest>,
) -> Response {
    let cmd = ClassifyPersonaCommand {
        answers: req.answers,
    };

    match handlers.classify_handler.handle(cmd) {
        Ok(result) => (StatusCode::OK, Json(PersonaResponse::from(result))).into_response(),
        Err(e) => ErrorResponse::validation(e.field(), e.to_string())
            .into_response_with(StatusCode::BAD_REQUEST),
    }
}
