//! HTTP adapter for outfit planning and calendar views.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreatePlanningRequest, DayPlanResponse, MonthParams, MonthPlanResponse,
    PlannedOutfitResponse, UpdatePlanningRequest,
};
pub use handlers::CalendarHandlers;
pub use routes::calendar_routes;
