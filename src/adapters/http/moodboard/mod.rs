//! HTTP adapter for moodboard endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AddDecorationRequest, ArrangeItemRequest, CanvasEditResponse, CreateMoodboardRequest,
    DecorationResponse, MoodboardListResponse, MoodboardResponse, PlaceItemRequest,
    PlacedItemResponse, UpdateMoodboardRequest,
};
pub use handlers::MoodboardHandlers;
pub use routes::moodboard_routes;
