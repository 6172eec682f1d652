//! Planning handlers - scheduling outfits onto calendar dates.

use std::sync::Arc;

use crate::domain::foundation::{OutfitId, PlanningId};
use crate::domain::outfit::{NewPlanning, OutfitError, PlanningEntry, PlanningPatch};
use crate::ports::OutfitRepository;

/// Command to plan an outfit for a date.
#[derive(Debug, Clone)]
pub struct PlanOutfitCommand {
    pub outfit_id: OutfitId,
    pub planning: NewPlanning,
}

/// Handler for adding a planning entry to an outfit.
pub struct PlanOutfitHandler {
    repository: Arc<dyn OutfitRepository>,
}

impl PlanOutfitHandler {
    pub fn new(repository: Arc<dyn OutfitRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: PlanOutfitCommand) -> Result<PlanningEntry, OutfitError> {
        if let Some(title) = &cmd.planning.event_title {
            if title.trim().is_empty() {
                return Err(OutfitError::validation("event_title", "must not be blank"));
            }
        }

        let entry = self
            .repository
            .create_planning(cmd.outfit_id, cmd.planning)
            .await?;
        tracing::info!(
            outfit_id = %cmd.outfit_id,
            planning_id = %entry.id,
            date = %entry.date,
            "outfit planned"
        );
        Ok(entry)
    }
}

/// Command to change a planning entry's date, title or reminder.
#[derive(Debug, Clone)]
pub struct UpdatePlanningCommand {
    pub outfit_id: OutfitId,
    pub planning_id: PlanningId,
    pub patch: PlanningPatch,
}

pub struct UpdatePlanningHandler {
    repository: Arc<dyn OutfitRepository>,
}

impl UpdatePlanningHandler {
    pub fn new(repository: Arc<dyn OutfitRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdatePlanningCommand) -> Result<PlanningEntry, OutfitError> {
        Ok(self
            .repository
            .update_planning(cmd.outfit_id, cmd.planning_id, cmd.patch)
            .await?)
    }
}

/// Command to unplan an outfit.
#[derive(Debug, Clone, Copy)]
pub struct DeletePlanningCommand {
    pub outfit_id: OutfitId,
    pub planning_id: PlanningId,
}

pub struct DeletePlanningHandler {
    repository: Arc<dyn OutfitRepository>,
}

impl DeletePlanningHandler {
    pub fn new(repository: Arc<dyn OutfitRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeletePlanningCommand) -> Result<(), OutfitError> {
        self.repository
            .delete_planning(cmd.outfit_id, cmd.planning_id)
            .await?;
        tracing::info!(outfit_id = %cmd.outfit_id, planning_id = %cmd.planning_id, "planning removed");
        Ok(())
    }
}
