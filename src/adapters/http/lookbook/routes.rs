//! HTTP routes for the lookbook page.

use axum::{routing::get, Router};

use super::handlers::{get_lookbook, LookbookHandlers};

/// Creates the lookbook router. Paths are relative to `/api`.
pub fn lookbook_routes(handlers: LookbookHandlers) -> Router {
    Router::new()
        .route("/lookbook", get(get_lookbook))
        .with_state(handlers)
}
