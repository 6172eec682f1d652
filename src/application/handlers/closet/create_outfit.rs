//! CreateOutfitHandler - Command handler for adding an outfit to the closet.

use std::sync::Arc;

use crate::domain::outfit::{NewOutfit, Outfit, OutfitError};
use crate::ports::OutfitRepository;

/// Command to upload a new outfit.
#[derive(Debug, Clone)]
pub struct CreateOutfitCommand {
    pub data: NewOutfit,
}

/// Handler for adding outfits.
pub struct CreateOutfitHandler {
    repository: Arc<dyn OutfitRepository>,
}

impl CreateOutfitHandler {
    pub fn new(repository: Arc<dyn OutfitRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateOutfitCommand) -> Result<Outfit, OutfitError> {
        cmd.data.validate()?;

        let outfit = self.repository.create(cmd.data).await?;
        tracing::info!(outfit_id = %outfit.id, category = %outfit.category, "outfit added");

        Ok(outfit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryOutfitStore, Latency};
    use crate::domain::foundation::{ErrorCode, Rating};
    use crate::domain::outfit::Category;

    fn handler() -> (CreateOutfitHandler, Arc<InMemoryOutfitStore>) {
        let store = Arc::new(InMemoryOutfitStore::new(Latency::none()));
        (CreateOutfitHandler::new(store.clone()), store)
    }

    #[tokio::test]
    async fn stores_outfit_with_supplied_fields() {
        let (handler, store) = handler();
        let data = NewOutfit::new("https://img.example/denim.jpg", Category::Bottom)
            .with_notes("Weekend denim")
            .with_tags(["Casual", "denim"])
            .with_rating(Rating::new(4).unwrap());

        let outfit = handler
            .handle(CreateOutfitCommand { data })
            .await
            .unwrap();

        assert_eq!(outfit.notes, "Weekend denim");
        assert!(outfit.tags.contains("casual"));
        assert!(outfit.is_favorite());
        assert_eq!(store.get_by_id(outfit.id).await.unwrap(), outfit);
    }

    #[tokio::test]
    async fn missing_image_is_rejected_before_reaching_store() {
        let (handler, store) = handler();
        let err = handler
            .handle(CreateOutfitCommand {
                data: NewOutfit::new("  ", Category::Top),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert!(store.is_empty().await);
    }
}
