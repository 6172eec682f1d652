//! Calendar queries over planned outfits.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::foundation::ValidationError;
use crate::domain::outfit::{planned_in_month, planned_on, Outfit, OutfitError, PlannedOutfit};
use crate::ports::OutfitRepository;

/// Query for what is planned on one day.
#[derive(Debug, Clone, Copy)]
pub struct GetDayPlanQuery {
    pub date: NaiveDate,
}

/// Query for a month of the calendar grid.
#[derive(Debug, Clone, Copy)]
pub struct GetMonthPlanQuery {
    pub year: i32,
    pub month: u32,
}

/// Handler for calendar reads. Only outfits with planning entries are loaded.
pub struct GetCalendarHandler {
    repository: Arc<dyn OutfitRepository>,
}

impl GetCalendarHandler {
    pub fn new(repository: Arc<dyn OutfitRepository>) -> Self {
        Self { repository }
    }

    /// Every outfit that has at least one planning entry.
    pub async fn planning_data(&self) -> Result<Vec<Outfit>, OutfitError> {
        Ok(self.repository.get_planning_data().await?)
    }

    pub async fn day(&self, query: GetDayPlanQuery) -> Result<Vec<PlannedOutfit>, OutfitError> {
        let outfits = self.repository.get_planning_data().await?;
        Ok(planned_on(&outfits, query.date))
    }

    pub async fn month(
        &self,
        query: GetMonthPlanQuery,
    ) -> Result<BTreeMap<NaiveDate, Vec<PlannedOutfit>>, OutfitError> {
        if !(1..=12).contains(&query.month) {
            return Err(ValidationError::out_of_range("month", 1, 12, query.month as i32).into());
        }
        let outfits = self.repository.get_planning_data().await?;
        Ok(planned_in_month(&outfits, query.year, query.month))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryOutfitStore, Latency};
    use crate::domain::foundation::OutfitId;
    use crate::domain::outfit::{Category, NewOutfit, NewPlanning};

    async fn store_with_plans() -> Arc<InMemoryOutfitStore> {
        let store = Arc::new(InMemoryOutfitStore::new(Latency::none()));
        for url in ["a.jpg", "b.jpg", "c.jpg"] {
            store.create(NewOutfit::new(url, Category::Top)).await.unwrap();
        }
        let day = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        store
            .create_planning(OutfitId::new(1), NewPlanning::new(day))
            .await
            .unwrap();
        store
            .create_planning(OutfitId::new(3), NewPlanning::new(day).with_event_title("Gala"))
            .await
            .unwrap();
        store
            .create_planning(
                OutfitId::new(3),
                NewPlanning::new(NaiveDate::from_ymd_opt(2024, 5, 22).unwrap()),
            )
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn day_lists_pairs_in_store_order() {
        let handler = GetCalendarHandler::new(store_with_plans().await);
        let planned = handler
            .day(GetDayPlanQuery {
                date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            })
            .await
            .unwrap();

        let ids: Vec<u32> = planned.iter().map(|p| p.outfit.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(planned[1].planning.event_title.as_deref(), Some("Gala"));
    }

    #[tokio::test]
    async fn month_groups_by_date() {
        let handler = GetCalendarHandler::new(store_with_plans().await);
        let month = handler
            .month(GetMonthPlanQuery { year: 2024, month: 5 })
            .await
            .unwrap();
        assert_eq!(month.len(), 2);

        let empty = handler
            .month(GetMonthPlanQuery { year: 2024, month: 6 })
            .await
            .unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn invalid_month_is_rejected() {
        let handler = GetCalendarHandler::new(store_with_plans().await);
        let err = handler
            .month(GetMonthPlanQuery { year: 2024, month: 13 })
            .await
            .unwrap_err();
        assert!(matches!(err, OutfitError::ValidationFailed { .. }));
    }

    #[tokio::test]
    async fn planning_data_skips_unplanned_outfits() {
        let handler = GetCalendarHandler::new(store_with_plans().await);
        let outfits = handler.planning_data().await.unwrap();
        assert_eq!(outfits.len(), 2);
    }
}
