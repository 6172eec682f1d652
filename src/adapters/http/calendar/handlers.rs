//! HTTP handlers for outfit planning and the calendar views.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;

use crate::adapters::http::closet::{handle_outfit_error, OutfitListResponse, PlanningResponse};
use crate::adapters::http::error::parse_path;
use crate::application::handlers::calendar::{
    DeletePlanningCommand, DeletePlanningHandler, GetCalendarHandler, GetDayPlanQuery,
    GetMonthPlanQuery, PlanOutfitCommand, PlanOutfitHandler, UpdatePlanningCommand,
    UpdatePlanningHandler,
};
use crate::domain::foundation::{OutfitId, PlanningId};

use super::dto::{
    CreatePlanningRequest, DayPlanResponse, MonthParams, MonthPlanResponse,
    UpdatePlanningRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CalendarHandlers {
    plan_handler: Arc<PlanOutfitHandler>,
    update_handler: Arc<UpdatePlanningHandler>,
    delete_handler: Arc<DeletePlanningHandler>,
    calendar_handler: Arc<GetCalendarHandler>,
}

impl CalendarHandlers {
    pub fn new(
        plan_handler: Arc<PlanOutfitHandler>,
        update_handler: Arc<UpdatePlanningHandler>,
        delete_handler: Arc<DeletePlanningHandler>,
        calendar_handler: Arc<GetCalendarHandler>,
    ) -> Self {
        Self {
            plan_handler,
            update_handler,
            delete_handler,
            calendar_handler,
        }
    }
}

fn parse_ids(outfit_id: &str, planning_id: &str) -> Result<(OutfitId, PlanningId), Response> {
    Ok((
        parse_path(outfit_id, "outfit ID")?,
        parse_path(planning_id, "planning ID")?,
    ))
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/planning - Outfits with at least one planned date
pub async fn planning_data(State(handlers): State<CalendarHandlers>) -> Response {
    match handlers.calendar_handler.planning_data().await {
        Ok(outfits) => (StatusCode::OK, Json(OutfitListResponse::from(outfits))).into_response(),
        Err(e) => handle_outfit_error(e),
    }
}

/// POST /api/outfits/:id/planning - Schedule an outfit
pub async fn plan_outfit(
    State(handlers): State<CalendarHandlers>,
    Path(outfit_id): Path<String>,
    Json(req): Json<CreatePlanningRequest>,
) -> Response {
    let outfit_id = match parse_path::<OutfitId>(&outfit_id, "outfit ID") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = PlanOutfitCommand {
        outfit_id,
        planning: req.into(),
    };

    match handlers.plan_handler.handle(cmd).await {
        Ok(entry) => (StatusCode::CREATED, Json(PlanningResponse::from(entry))).into_response(),
        Err(e) => handle_outfit_error(e),
    }
}

/// PATCH /api/outfits/:id/planning/:planning_id - Edit a planning entry
pub async fn update_planning(
    State(handlers): State<CalendarHandlers>,
    Path((outfit_id, planning_id)): Path<(String, String)>,
    Json(req): Json<UpdatePlanningRequest>,
) -> Response {
    let (outfit_id, planning_id) = match parse_ids(&outfit_id, &planning_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let cmd = UpdatePlanningCommand {
        outfit_id,
        planning_id,
        patch: req.into(),
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(entry) => (StatusCode::OK, Json(PlanningResponse::from(entry))).into_response(),
        Err(e) => handle_outfit_error(e),
    }
}

/// DELETE /api/outfits/:id/planning/:planning_id - Unschedule
pub async fn delete_planning(
    State(handlers): State<CalendarHandlers>,
    Path((outfit_id, planning_id)): Path<(String, String)>,
) -> Response {
    let (outfit_id, planning_id) = match parse_ids(&outfit_id, &planning_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let cmd = DeletePlanningCommand {
        outfit_id,
        planning_id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_outfit_error(e),
    }
}

/// GET /api/calendar/:date - Plans for one day
pub async fn day_plan(
    State(handlers): State<CalendarHandlers>,
    Path(date): Path<String>,
) -> Response {
    let date = match parse_path::<NaiveDate>(&date, "date") {
        Ok(date) => date,
        Err(response) => return response,
    };

    match handlers.calendar_handler.day(GetDayPlanQuery { date }).await {
        Ok(planned) => {
            let response = DayPlanResponse {
                date,
                planned: planned.into_iter().map(Into::into).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_outfit_error(e),
    }
}

/// GET /api/calendar?year=&month= - Plans grouped by day for a month
pub async fn month_plan(
    State(handlers): State<CalendarHandlers>,
    Query(params): Query<MonthParams>,
) -> Response {
    let query = GetMonthPlanQuery {
        year: params.year,
        month: params.month,
    };

    match handlers.calendar_handler.month(query).await {
        Ok(days) => {
            let response = MonthPlanResponse {
                year: params.year,
                month: params.month,
                days: days
                    .into_iter()
                    .map(|(day, planned)| (day, planned.into_iter().map(Into::into).collect()))
                    .collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_outfit_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_planning_id_is_400() {
        let response = parse_ids("3", "first").unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn both_ids_parse() {
        let (outfit_id, planning_id) = parse_ids("3", "2").ok().unwrap();
        assert_eq!(outfit_id, OutfitId::new(3));
        assert_eq!(planning_id, PlanningId::new(2));
    }
}
