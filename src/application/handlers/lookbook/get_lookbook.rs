//! GetLookbookHandler - the chronological lookbook page.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::lookbook::{group_by_day, timeline, DayGroup, LookbookFilter, LookbookStats};
use crate::domain::outfit::OutfitError;
use crate::ports::OutfitRepository;

/// Query for the lookbook page.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetLookbookQuery {
    pub filter: LookbookFilter,
    /// Reference point for the week and month filters. Defaults to now.
    pub today: Option<Timestamp>,
}

/// Lookbook page contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookbookView {
    pub filter: LookbookFilter,
    /// Newest day first; outfits within a day newest first.
    pub days: Vec<DayGroup>,
    pub shown: usize,
    /// Always computed over the whole closet, whatever the filter.
    pub stats: LookbookStats,
}

pub struct GetLookbookHandler {
    repository: Arc<dyn OutfitRepository>,
}

impl GetLookbookHandler {
    pub fn new(repository: Arc<dyn OutfitRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetLookbookQuery) -> Result<LookbookView, OutfitError> {
        let today = query.today.unwrap_or_else(Timestamp::now);
        let outfits = self.repository.get_all().await?;

        let stats = LookbookStats::compute(&outfits, &today);
        let entries = timeline(outfits, query.filter, &today);
        let shown = entries.len();

        Ok(LookbookView {
            filter: query.filter,
            days: group_by_day(entries),
            shown,
            stats,
        })
    }
}
