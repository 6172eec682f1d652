//! Closet queries - single outfit, filtered grid and quick stats.

use std::sync::Arc;

use crate::domain::foundation::OutfitId;
use crate::domain::lookbook::ClosetStats;
use crate::domain::outfit::{ClosetFilter, Outfit, OutfitError};
use crate::ports::OutfitRepository;

/// Query to get an outfit by ID.
#[derive(Debug, Clone, Copy)]
pub struct GetOutfitQuery {
    pub outfit_id: OutfitId,
}

pub struct GetOutfitHandler {
    repository: Arc<dyn OutfitRepository>,
}

impl GetOutfitHandler {
    pub fn new(repository: Arc<dyn OutfitRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetOutfitQuery) -> Result<Outfit, OutfitError> {
        Ok(self.repository.get_by_id(query.outfit_id).await?)
    }
}

/// Query for the closet grid. An empty filter lists everything.
#[derive(Debug, Clone, Default)]
pub struct SearchClosetQuery {
    pub filter: ClosetFilter,
}

/// Handler for listing and searching the closet.
pub struct SearchClosetHandler {
    repository: Arc<dyn OutfitRepository>,
}

impl SearchClosetHandler {
    pub fn new(repository: Arc<dyn OutfitRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: SearchClosetQuery) -> Result<Vec<Outfit>, OutfitError> {
        let outfits = self.repository.get_all().await?;
        Ok(query.filter.apply(outfits))
    }
}

/// Handler for the home page quick stats.
pub struct GetClosetStatsHandler {
    repository: Arc<dyn OutfitRepository>,
}

impl GetClosetStatsHandler {
    pub fn new(repository: Arc<dyn OutfitRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<ClosetStats, OutfitError> {
        let outfits = self.repository.get_all().await?;
        Ok(ClosetStats::compute(&outfits))
    }
}
