//! Outfit edit handlers - patching, wear tracking and deletion.

use std::sync::Arc;

use crate::domain::foundation::{OutfitId, Timestamp};
use crate::domain::outfit::{Outfit, OutfitError, OutfitPatch};
use crate::ports::OutfitRepository;

/// Command to edit an outfit's details.
#[derive(Debug, Clone)]
pub struct UpdateOutfitCommand {
    pub outfit_id: OutfitId,
    pub patch: OutfitPatch,
}

/// Handler for editing outfits (rating, tags, notes, category, image).
pub struct UpdateOutfitHandler {
    repository: Arc<dyn OutfitRepository>,
}

impl UpdateOutfitHandler {
    pub fn new(repository: Arc<dyn OutfitRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateOutfitCommand) -> Result<Outfit, OutfitError> {
        let outfit = self.repository.update(cmd.outfit_id, cmd.patch).await?;
        tracing::debug!(outfit_id = %outfit.id, "outfit updated");
        Ok(outfit)
    }
}

/// Command to record that an outfit was worn.
#[derive(Debug, Clone)]
pub struct MarkWornCommand {
    pub outfit_id: OutfitId,
    /// Defaults to now.
    pub worn_at: Option<Timestamp>,
}

/// Handler appending to an outfit's wear history.
pub struct MarkWornHandler {
    repository: Arc<dyn OutfitRepository>,
}

impl MarkWornHandler {
    pub fn new(repository: Arc<dyn OutfitRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: MarkWornCommand) -> Result<Outfit, OutfitError> {
        // Re-read so the patch carries the latest history.
        let mut outfit = self.repository.get_by_id(cmd.outfit_id).await?;
        outfit.mark_worn(cmd.worn_at.unwrap_or_else(Timestamp::now));

        let patch = OutfitPatch {
            worn_dates: Some(outfit.worn_dates),
            ..Default::default()
        };
        Ok(self.repository.update(cmd.outfit_id, patch).await?)
    }
}

/// Command to remove an outfit from the closet.
#[derive(Debug, Clone, Copy)]
pub struct DeleteOutfitCommand {
    pub outfit_id: OutfitId,
}

pub struct DeleteOutfitHandler {
    repository: Arc<dyn OutfitRepository>,
}

impl DeleteOutfitHandler {
    pub fn new(repository: Arc<dyn OutfitRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteOutfitCommand) -> Result<(), OutfitError> {
        self.repository.delete(cmd.outfit_id).await?;
        tracing::info!(outfit_id = %cmd.outfit_id, "outfit deleted");
        Ok(())
    }
}
