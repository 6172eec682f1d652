//! Request and response DTOs for calendar endpoints.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::adapters::http::closet::{OutfitResponse, PlanningResponse};
use crate::domain::outfit::{NewPlanning, PlannedOutfit, PlanningPatch};

/// POST /api/outfits/:id/planning
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlanningRequest {
    pub date: NaiveDate,
    pub event_title: Option<String>,
    /// Reminders are on unless switched off.
    pub reminder: Option<bool>,
}

impl From<CreatePlanningRequest> for NewPlanning {
    fn from(req: CreatePlanningRequest) -> Self {
        let mut planning = NewPlanning::new(req.date);
        if let Some(title) = req.event_title {
            planning = planning.with_event_title(title);
        }
        if let Some(reminder) = req.reminder {
            planning = planning.with_reminder(reminder);
        }
        planning
    }
}

/// PATCH /api/outfits/:id/planning/:planning_id
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlanningRequest {
    pub date: Option<NaiveDate>,
    pub event_title: Option<String>,
    pub reminder: Option<bool>,
}

impl From<UpdatePlanningRequest> for PlanningPatch {
    fn from(req: UpdatePlanningRequest) -> Self {
        PlanningPatch {
            date: req.date,
            event_title: req.event_title,
            reminder: req.reminder,
        }
    }
}

/// GET /api/calendar?year=&month=
#[derive(Debug, Clone, Deserialize)]
pub struct MonthParams {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedOutfitResponse {
    pub outfit: OutfitResponse,
    pub planning: PlanningResponse,
}

impl From<PlannedOutfit> for PlannedOutfitResponse {
    fn from(planned: PlannedOutfit) -> Self {
        Self {
            outfit: planned.outfit.into(),
            planning: planned.planning.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlanResponse {
    pub date: NaiveDate,
    pub planned: Vec<PlannedOutfitResponse>,
}

/// Month view keyed by ISO date; days without plans are absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthPlanResponse {
    pub year: i32,
    pub month: u32,
    pub days: BTreeMap<NaiveDate, Vec<PlannedOutfitResponse>>,
}
