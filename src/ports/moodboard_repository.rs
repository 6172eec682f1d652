//! Moodboard repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, MoodboardId};
use crate::domain::moodboard::{Moodboard, MoodboardPatch, NewMoodboard};

/// Repository port for moodboards.
///
/// Implementations own the `created_at` / `last_modified` stamps; every
/// successful update refreshes `last_modified`.
#[async_trait]
pub trait MoodboardRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Moodboard>, DomainError>;

    /// # Errors
    ///
    /// - `MoodboardNotFound` if no moodboard has this id
    async fn get_by_id(&self, id: MoodboardId) -> Result<Moodboard, DomainError>;

    async fn create(&self, data: NewMoodboard) -> Result<Moodboard, DomainError>;

    async fn update(&self, id: MoodboardId, patch: MoodboardPatch) -> Result<Moodboard, DomainError>;

    async fn delete(&self, id: MoodboardId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moodboard_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn MoodboardRepository) {}
    }
}
