//! HTTP routes for moodboard endpoints.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use super::handlers::{
    add_decoration, arrange_item, create_moodboard, delete_moodboard, get_moodboard,
    list_moodboards, place_item, remove_element, update_moodboard, MoodboardHandlers,
};

/// Creates the moodboard router. Paths are relative to `/api`.
pub fn moodboard_routes(handlers: MoodboardHandlers) -> Router {
    Router::new()
        .route("/moodboards", get(list_moodboards).post(create_moodboard))
        .route(
            "/moodboards/:id",
            get(get_moodboard)
                .patch(update_moodboard)
                .delete(delete_moodboard),
        )
        .route("/moodboards/:id/items", post(place_item))
        .route("/moodboards/:id/items/:element_id", patch(arrange_item))
        .route("/moodboards/:id/decorations", post(add_decoration))
        .route("/moodboards/:id/elements/:element_id", delete(remove_element))
        .with_state(handlers)
}
