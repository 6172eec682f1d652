//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the calendar date (UTC) of this timestamp.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// True when both timestamps fall in the same ISO week.
    pub fn same_week_as(&self, other: &Timestamp) -> bool {
        self.0.iso_week() == other.0.iso_week()
    }

    /// True when both timestamps fall in the same calendar month.
    pub fn same_month_as(&self, other: &Timestamp) -> bool {
        self.0.year() == other.0.year() && self.0.month() == other.0.month()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    fn at(rfc3339: &str) -> Timestamp {
        Timestamp::from_datetime(
            DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_is_before_works_correctly() {
        let ts1 = Timestamp::now();
        sleep(Duration::from_millis(10));
        let ts2 = Timestamp::now();

        assert!(ts1.is_before(&ts2));
        assert!(ts2.is_after(&ts1));
    }

    #[test]
    fn date_drops_time_component() {
        let ts = at("2024-03-15T23:59:00Z");
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn same_week_uses_iso_weeks() {
        // Monday and Sunday of the same ISO week
        assert!(at("2024-03-11T08:00:00Z").same_week_as(&at("2024-03-17T20:00:00Z")));
        // Sunday and the following Monday
        assert!(!at("2024-03-17T20:00:00Z").same_week_as(&at("2024-03-18T08:00:00Z")));
    }

    #[test]
    fn same_month_checks_year_too() {
        assert!(at("2024-03-01T00:00:00Z").same_month_as(&at("2024-03-31T00:00:00Z")));
        assert!(!at("2024-03-01T00:00:00Z").same_month_as(&at("2023-03-01T00:00:00Z")));
    }

    #[test]
    fn timestamp_serializes_as_rfc3339() {
        let json = serde_json::to_string(&at("2024-01-15T10:30:00Z")).unwrap();
        assert!(json.contains("2024-01-15T10:30:00"));
    }
}
