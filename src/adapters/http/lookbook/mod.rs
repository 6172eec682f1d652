//! HTTP adapter for the lookbook timeline.

mod dto;
mod handlers;
mod routes;

pub use dto::{DayGroupResponse, LookbookParams, LookbookResponse, LookbookStatsResponse};
pub use handlers::LookbookHandlers;
pub use routes::lookbook_routes;
