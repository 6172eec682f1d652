//! HTTP handlers for the today page.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::today::{TodayError, TodayView};
use crate::application::handlers::weather::ResolveWeatherHandler;

use super::dto::{CurrentWeatherResponse, TodayResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct TodayHandlers {
    view: Arc<TodayView>,
    weather_handler: Arc<ResolveWeatherHandler>,
}

impl TodayHandlers {
    pub fn new(view: Arc<TodayView>, weather_handler: Arc<ResolveWeatherHandler>) -> Self {
        Self {
            view,
            weather_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/today - Fresh look of the day
pub async fn look_of_the_day(State(handlers): State<TodayHandlers>) -> Response {
    match handlers.view.refresh().await {
        Ok(refreshed) => {
            if !refreshed.applied {
                tracing::debug!("newer refresh already in place");
            }
            (StatusCode::OK, Json(TodayResponse::from(refreshed.look))).into_response()
        }
        Err(e) => handle_today_error(e),
    }
}

/// POST /api/today/shuffle - Another pick from the same pool
pub async fn shuffle(State(handlers): State<TodayHandlers>) -> Response {
    if let Some(look) = handlers.view.shuffle() {
        return (StatusCode::OK, Json(TodayResponse::from(look))).into_response();
    }

    // Nothing loaded yet; build the first look instead.
    look_of_the_day(State(handlers)).await
}

/// GET /api/weather - Current reading, fallback included
pub async fn current_weather(State(handlers): State<TodayHandlers>) -> Response {
    let resolved = handlers.weather_handler.handle().await;
    (StatusCode::OK, Json(CurrentWeatherResponse::from(resolved))).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_today_error(error: TodayError) -> Response {
    tracing::error!(error = %error.cause(), "look of the day failed");
    let body = ErrorResponse::store(error.message());
    ErrorResponse {
        code: error.code().to_string(),
        retryable: error.is_retryable(),
        ..body
    }
    .into_response_with(StatusCode::SERVICE_UNAVAILABLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::today::LOAD_FAILED_MESSAGE;

    #[tokio::test]
    async fn store_failure_is_retryable_503() {
        let response = handle_today_error(TodayError::Store("timeout".to_string()));
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert!(body.retryable);
        assert_eq!(body.message, LOAD_FAILED_MESSAGE);
    }
}
