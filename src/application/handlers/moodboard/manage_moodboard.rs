//! Moodboard lifecycle handlers - create, read, rename, delete.

use std::sync::Arc;

use crate::domain::foundation::MoodboardId;
use crate::domain::moodboard::{Moodboard, MoodboardError, MoodboardPatch, NewMoodboard};
use crate::ports::MoodboardRepository;

/// Command to start a new moodboard.
#[derive(Debug, Clone, Default)]
pub struct CreateMoodboardCommand {
    pub data: NewMoodboard,
}

pub struct CreateMoodboardHandler {
    repository: Arc<dyn MoodboardRepository>,
}

impl CreateMoodboardHandler {
    pub fn new(repository: Arc<dyn MoodboardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateMoodboardCommand) -> Result<Moodboard, MoodboardError> {
        let board = self.repository.create(cmd.data).await?;
        tracing::info!(moodboard_id = %board.id, name = %board.name, "moodboard created");
        Ok(board)
    }
}

/// Handler for moodboard reads.
pub struct GetMoodboardsHandler {
    repository: Arc<dyn MoodboardRepository>,
}

impl GetMoodboardsHandler {
    pub fn new(repository: Arc<dyn MoodboardRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Moodboard>, MoodboardError> {
        Ok(self.repository.get_all().await?)
    }

    pub async fn get(&self, id: MoodboardId) -> Result<Moodboard, MoodboardError> {
        Ok(self.repository.get_by_id(id).await?)
    }
}

/// Command to patch a moodboard (name and/or whole canvas).
#[derive(Debug, Clone)]
pub struct UpdateMoodboardCommand {
    pub moodboard_id: MoodboardId,
    pub patch: MoodboardPatch,
}

pub struct UpdateMoodboardHandler {
    repository: Arc<dyn MoodboardRepository>,
}

impl UpdateMoodboardHandler {
    pub fn new(repository: Arc<dyn MoodboardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateMoodboardCommand) -> Result<Moodboard, MoodboardError> {
        Ok(self.repository.update(cmd.moodboard_id, cmd.patch).await?)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteMoodboardCommand {
    pub moodboard_id: MoodboardId,
}

pub struct DeleteMoodboardHandler {
    repository: Arc<dyn MoodboardRepository>,
}

impl DeleteMoodboardHandler {
    pub fn new(repository: Arc<dyn MoodboardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteMoodboardCommand) -> Result<(), MoodboardError> {
        self.repository.delete(cmd.moodboard_id).await?;
        tracing::info!(moodboard_id = %cmd.moodboard_id, "moodboard deleted");
        Ok(())
    }
}
