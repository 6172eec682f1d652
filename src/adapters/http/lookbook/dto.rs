//! DTOs for the lookbook page.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::adapters::http::closet::OutfitResponse;
use crate::application::handlers::lookbook::LookbookView;
use crate::domain::lookbook::{DayGroup, LookbookStats};

/// GET /api/lookbook?filter=
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookbookParams {
    /// all, this_week, this_month or favorites; absent means all.
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayGroupResponse {
    pub date: NaiveDate,
    pub outfits: Vec<OutfitResponse>,
}

impl From<DayGroup> for DayGroupResponse {
    fn from(group: DayGroup) -> Self {
        Self {
            date: group.date,
            outfits: group.outfits.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookbookStatsResponse {
    pub total: usize,
    pub favorites: usize,
    pub this_month: usize,
    pub top_category: String,
}

impl From<LookbookStats> for LookbookStatsResponse {
    fn from(stats: LookbookStats) -> Self {
        Self {
            total: stats.total,
            favorites: stats.favorites,
            this_month: stats.this_month,
            top_category: stats.top_category,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookbookResponse {
    pub filter: String,
    pub filter_label: String,
    pub days: Vec<DayGroupResponse>,
    pub shown: usize,
    pub stats: LookbookStatsResponse,
}

impl From<LookbookView> for LookbookResponse {
    fn from(view: LookbookView) -> Self {
        Self {
            filter: view.filter.as_str().to_string(),
            filter_label: view.filter.label().to_string(),
            days: view.days.into_iter().map(Into::into).collect(),
            shown: view.shown,
            stats: view.stats.into(),
        }
    }
}
