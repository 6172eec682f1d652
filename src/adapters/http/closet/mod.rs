//! HTTP adapter for closet endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ClosetStatsResponse, CreateOutfitRequest, MarkWornRequest, OutfitListResponse,
    OutfitResponse, PlanningResponse, SearchParams, UpdateOutfitRequest,
};
pub(crate) use handlers::handle_outfit_error;
pub use handlers::ClosetHandlers;
pub use routes::closet_routes;
