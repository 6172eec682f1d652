//! Planning entries: an outfit scheduled for a calendar date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PlanningId, Timestamp};

/// An association between an outfit and a calendar date.
///
/// Owned by exactly one outfit; the id is only unique within that outfit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningEntry {
    pub id: PlanningId,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_title: Option<String>,
    #[serde(default)]
    pub reminder: bool,
    pub created_at: Timestamp,
}

/// Data for scheduling an outfit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewPlanning {
    pub date: NaiveDate,
    #[serde(default)]
    pub event_title: Option<String>,
    #[serde(default = "default_reminder")]
    pub reminder: bool,
}

fn default_reminder() -> bool {
    true
}

impl NewPlanning {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            event_title: None,
            reminder: default_reminder(),
        }
    }

    pub fn with_event_title(mut self, title: impl Into<String>) -> Self {
        self.event_title = Some(title.into());
        self
    }

    pub fn with_reminder(mut self, reminder: bool) -> Self {
        self.reminder = reminder;
        self
    }
}

/// Partial update of a planning entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlanningPatch {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub event_title: Option<String>,
    #[serde(default)]
    pub reminder: Option<bool>,
}

impl PlanningEntry {
    /// Creates an entry from scheduling data.
    pub fn create(id: PlanningId, data: NewPlanning) -> Self {
        Self {
            id,
            date: data.date,
            event_title: clean_title(data.event_title),
            reminder: data.reminder,
            created_at: Timestamp::now(),
        }
    }

    /// Applies a partial update.
    pub fn apply(&mut self, patch: PlanningPatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if patch.event_title.is_some() {
            self.event_title = clean_title(patch.event_title);
        }
        if let Some(reminder) = patch.reminder {
            self.reminder = reminder;
        }
    }
}

// Blank titles are stored as absent.
fn clean_title(title: Option<String>) -> Option<String> {
    title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn create_copies_scheduling_data() {
        let entry = PlanningEntry::create(
            PlanningId::new(1),
            NewPlanning::new(date(2024, 6, 1)).with_event_title("Brunch"),
        );
        assert_eq!(entry.date, date(2024, 6, 1));
        assert_eq!(entry.event_title.as_deref(), Some("Brunch"));
        assert!(entry.reminder);
    }

    #[test]
    fn blank_event_title_is_dropped() {
        let entry = PlanningEntry::create(
            PlanningId::new(1),
            NewPlanning::new(date(2024, 6, 1)).with_event_title("   "),
        );
        assert_eq!(entry.event_title, None);
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut entry = PlanningEntry::create(
            PlanningId::new(1),
            NewPlanning::new(date(2024, 6, 1)).with_event_title("Brunch"),
        );
        entry.apply(PlanningPatch {
            reminder: Some(false),
            ..Default::default()
        });
        assert_eq!(entry.event_title.as_deref(), Some("Brunch"));
        assert!(!entry.reminder);
        assert_eq!(entry.date, date(2024, 6, 1));
    }

    #[test]
    fn new_planning_defaults_reminder_on_when_deserialized() {
        let data: NewPlanning = serde_json::from_str(r#"{"date":"2024-06-01"}"#).unwrap();
        assert!(data.reminder);
        assert_eq!(data.event_title, None);
    }
}
