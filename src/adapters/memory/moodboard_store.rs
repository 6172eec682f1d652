//! In-memory moodboard store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{next_id_after, DomainError, ErrorCode, MoodboardId, Timestamp};
use crate::domain::moodboard::{Moodboard, MoodboardPatch, NewMoodboard};
use crate::ports::MoodboardRepository;

use super::latency::{pause, Latency};
use super::seed;

struct Boards {
    moodboards: Vec<Moodboard>,
    next_id: u32,
}

impl Boards {
    fn position(&self, id: MoodboardId) -> Result<usize, DomainError> {
        self.moodboards
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| DomainError::not_found(ErrorCode::MoodboardNotFound, "Moodboard", id))
    }
}

/// Moodboard repository backed by a vector in memory.
pub struct InMemoryMoodboardStore {
    boards: RwLock<Boards>,
    latency: Latency,
}

impl InMemoryMoodboardStore {
    pub fn new(latency: Latency) -> Self {
        Self::with_moodboards(Vec::new(), latency)
    }

    pub fn with_moodboards(moodboards: Vec<Moodboard>, latency: Latency) -> Self {
        let next_id = next_id_after(moodboards.iter().map(|m| m.id));
        Self {
            boards: RwLock::new(Boards { moodboards, next_id }),
            latency,
        }
    }

    pub fn seeded(latency: Latency) -> Result<Self, DomainError> {
        Ok(Self::with_moodboards(seed::moodboards()?, latency))
    }
}

#[async_trait]
impl MoodboardRepository for InMemoryMoodboardStore {
    async fn get_all(&self) -> Result<Vec<Moodboard>, DomainError> {
        pause(self.latency.get_all).await;
        Ok(self.boards.read().await.moodboards.clone())
    }

    async fn get_by_id(&self, id: MoodboardId) -> Result<Moodboard, DomainError> {
        pause(self.latency.get_by_id).await;
        let boards = self.boards.read().await;
        let index = boards.position(id)?;
        Ok(boards.moodboards[index].clone())
    }

    async fn create(&self, data: NewMoodboard) -> Result<Moodboard, DomainError> {
        pause(self.latency.create).await;
        let mut boards = self.boards.write().await;
        let board = Moodboard::create(MoodboardId::new(boards.next_id), data, Timestamp::now());
        boards.next_id += 1;
        boards.moodboards.push(board.clone());
        Ok(board)
    }

    async fn update(&self, id: MoodboardId, patch: MoodboardPatch) -> Result<Moodboard, DomainError> {
        pause(self.latency.update).await;
        let mut boards = self.boards.write().await;
        let index = boards.position(id)?;
        let board = &mut boards.moodboards[index];
        board.apply(patch, Timestamp::now())?;
        Ok(board.clone())
    }

    async fn delete(&self, id: MoodboardId) -> Result<(), DomainError> {
        pause(self.latency.delete).await;
        let mut boards = self.boards.write().await;
        let index = boards.position(id)?;
        boards.moodboards.remove(index);
        Ok(())
    }
}
