//! HTTP routes for calendar endpoints.

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{
    day_plan, delete_planning, month_plan, plan_outfit, planning_data, update_planning,
    CalendarHandlers,
};

/// Creates the calendar router. Paths are relative to `/api`.
pub fn calendar_routes(handlers: CalendarHandlers) -> Router {
    Router::new()
        .route("/planning", get(planning_data))
        .route("/outfits/:id/planning", post(plan_outfit))
        .route(
            "/outfits/:id/planning/:planning_id",
            patch(update_planning).delete(delete_planning),
        )
        .route("/calendar", get(month_plan))
        .route("/calendar/:date", get(day_plan))
        .with_state(handlers)
}
