//! Chronological lookbook of every outfit added.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::outfit::Outfit;

/// Timeline filter chips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookbookFilter {
    #[default]
    All,
    ThisWeek,
    ThisMonth,
    Favorites,
}

impl LookbookFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookbookFilter::All => "all",
            LookbookFilter::ThisWeek => "this_week",
            LookbookFilter::ThisMonth => "this_month",
            LookbookFilter::Favorites => "favorites",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LookbookFilter::All => "All Time",
            LookbookFilter::ThisWeek => "This Week",
            LookbookFilter::ThisMonth => "This Month",
            LookbookFilter::Favorites => "Favorites",
        }
    }

    /// True when the outfit belongs under this filter relative to `today`.
    pub fn keeps(&self, outfit: &Outfit, today: &Timestamp) -> bool {
        match self {
            LookbookFilter::All => true,
            LookbookFilter::ThisWeek => outfit.date_added.same_week_as(today),
            LookbookFilter::ThisMonth => outfit.date_added.same_month_as(today),
            LookbookFilter::Favorites => outfit.is_favorite(),
        }
    }
}

impl fmt::Display for LookbookFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LookbookFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(LookbookFilter::All),
            "this_week" | "week" => Ok(LookbookFilter::ThisWeek),
            "this_month" | "month" => Ok(LookbookFilter::ThisMonth),
            "favorites" => Ok(LookbookFilter::Favorites),
            other => Err(ValidationError::invalid_format(
                "filter",
                format!("unknown lookbook filter '{}'", other),
            )),
        }
    }
}

/// Outfits added on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub outfits: Vec<Outfit>,
}

/// Sorts newest first, then applies the filter.
pub fn timeline(mut outfits: Vec<Outfit>, filter: LookbookFilter, today: &Timestamp) -> Vec<Outfit> {
    outfits.sort_by(|a, b| b.date_added.cmp(&a.date_added));
    outfits.retain(|o| filter.keeps(o, today));
    outfits
}

/// Groups consecutive outfits by the day they were added, keeping order.
pub fn group_by_day(outfits: Vec<Outfit>) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    for outfit in outfits {
        let date = outfit.date_added.date();
        match groups.iter_mut().find(|g| g.date == date) {
            Some(group) => group.outfits.push(outfit),
            None => groups.push(DayGroup {
                date,
                outfits: vec![outfit],
            }),
        }
    }
    groups
}
