//! HTTP routes for closet endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    closet_stats, create_outfit, delete_outfit, get_outfit, list_outfits, mark_worn,
    search_outfits, update_outfit, ClosetHandlers,
};

/// Creates the closet router. Paths are relative to `/api`.
pub fn closet_routes(handlers: ClosetHandlers) -> Router {
    Router::new()
        .route("/outfits", get(list_outfits).post(create_outfit))
        .route("/outfits/search", get(search_outfits))
        .route("/outfits/stats", get(closet_stats))
        .route(
            "/outfits/:id",
            get(get_outfit).patch(update_outfit).delete(delete_outfit),
        )
        .route("/outfits/:id/worn", post(mark_worn))
        .with_state(handlers)
}
