//! Outfit repository port.
//!
//! The closet store. Every operation is async, returns value copies and
//! fails with `OutfitNotFound` (or `PlanningNotFound`) for unknown ids.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OutfitId, PlanningId};
use crate::domain::outfit::{NewOutfit, NewPlanning, Outfit, OutfitPatch, PlanningEntry, PlanningPatch};
use crate::domain::weather::WeatherCondition;

/// Repository port for outfits and their planning entries.
#[async_trait]
pub trait OutfitRepository: Send + Sync {
    /// All outfits in store order.
    async fn get_all(&self) -> Result<Vec<Outfit>, DomainError>;

    /// # Errors
    ///
    /// - `OutfitNotFound` if no outfit has this id
    async fn get_by_id(&self, id: OutfitId) -> Result<Outfit, DomainError>;

    /// Stores a new outfit and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `EmptyField` when the upload has no image
    async fn create(&self, data: NewOutfit) -> Result<Outfit, DomainError>;

    /// Merges a patch into a stored outfit.
    async fn update(&self, id: OutfitId, patch: OutfitPatch) -> Result<Outfit, DomainError>;

    async fn delete(&self, id: OutfitId) -> Result<(), DomainError>;

    /// Outfits carrying a signature tag of the temperature's band.
    ///
    /// The 20–25 °C band has no signature tags and yields nothing.
    async fn get_by_temperature_range(&self, temperature_c: i32) -> Result<Vec<Outfit>, DomainError>;

    /// Outfits that survive the sky condition.
    async fn get_by_weather_condition(
        &self,
        condition: &WeatherCondition,
    ) -> Result<Vec<Outfit>, DomainError>;

    /// Outfits with at least one planning entry.
    async fn get_planning_data(&self) -> Result<Vec<Outfit>, DomainError>;

    async fn create_planning(
        &self,
        outfit_id: OutfitId,
        data: NewPlanning,
    ) -> Result<PlanningEntry, DomainError>;

    /// # Errors
    ///
    /// - `OutfitNotFound` / `PlanningNotFound` for unknown ids
    async fn update_planning(
        &self,
        outfit_id: OutfitId,
        planning_id: PlanningId,
        patch: PlanningPatch,
    ) -> Result<PlanningEntry, DomainError>;

    async fn delete_planning(
        &self,
        outfit_id: OutfitId,
        planning_id: PlanningId,
    ) -> Result<(), DomainError>;
}
