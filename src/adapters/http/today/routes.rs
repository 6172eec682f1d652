//! HTTP routes for the today page.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{current_weather, look_of_the_day, shuffle, TodayHandlers};

/// Creates the today router. Paths are relative to `/api`.
pub fn today_routes(handlers: TodayHandlers) -> Router {
    Router::new()
        .route("/today", get(look_of_the_day))
        .route("/today/shuffle", post(shuffle))
        .route("/weather", get(current_weather))
        .with_state(handlers)
}
