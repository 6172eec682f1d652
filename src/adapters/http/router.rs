//! Application router: resource routes under `/api`, health at the root,
//! and the middleware stack shared by the binary and the integration tests.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;

use super::calendar::calendar_routes;
use super::closet::closet_routes;
use super::lookbook::lookbook_routes;
use super::moodboard::moodboard_routes;
use super::persona::persona_routes;
use super::state::AppState;
use super::today::today_routes;

/// Every `/api` route, without middleware.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .merge(closet_routes(state.closet))
        .merge(calendar_routes(state.calendar))
        .merge(moodboard_routes(state.moodboard))
        .merge(today_routes(state.today))
        .merge(persona_routes(state.persona))
        .merge(lookbook_routes(state.lookbook))
}

/// Builds the full application router.
///
/// Layers, outermost first: CORS, request tracing, request timeout.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes(state))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(build_cors_layer(config))
}

/// Builds the CORS layer. No configured origins means any origin.
///
/// Unparseable origins are skipped with a warning.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE]);

    let configured = config.cors_origins_list();
    if configured.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = configured
        .into_iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %o, error = %e, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(origins)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "service": env!("CARGO_PKG_NAME") }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_accepts_configured_origins() {
        let config = ServerConfig {
            cors_origins: Some("http://localhost:5173, http://bad\u{7f}host".to_string()),
            ..Default::default()
        };
        // Invalid entries are dropped rather than panicking.
        let _layer = build_cors_layer(&config);
    }

    #[test]
    fn cors_without_origins_allows_any() {
        let _layer = build_cors_layer(&ServerConfig::default());
    }
}
