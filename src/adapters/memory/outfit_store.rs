//! In-memory outfit store.
//!
//! Holds the closet behind a tokio `RwLock` and hands out clones, so callers
//! never observe a record mid-mutation. New outfits get ids from a monotonic
//! counter that starts after the largest seeded id and never goes back, so a
//! deleted id is never handed out again.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{next_id_after, DomainError, ErrorCode, OutfitId, PlanningId};
use crate::domain::outfit::{NewOutfit, NewPlanning, Outfit, OutfitPatch, PlanningEntry, PlanningPatch};
use crate::domain::weather::{suits_condition, TemperatureBand, WeatherCondition};
use crate::ports::OutfitRepository;

use super::latency::{pause, Latency};
use super::seed;

struct Closet {
    outfits: Vec<Outfit>,
    next_id: u32,
}

impl Closet {
    fn position(&self, id: OutfitId) -> Result<usize, DomainError> {
        self.outfits
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| outfit_not_found(id))
    }
}

/// Outfit repository backed by a vector in memory.
pub struct InMemoryOutfitStore {
    closet: RwLock<Closet>,
    latency: Latency,
}

impl InMemoryOutfitStore {
    /// Creates an empty store.
    pub fn new(latency: Latency) -> Self {
        Self::with_outfits(Vec::new(), latency)
    }

    /// Creates a store holding `outfits`.
    pub fn with_outfits(outfits: Vec<Outfit>, latency: Latency) -> Self {
        let next_id = next_id_after(outfits.iter().map(|o| o.id));
        Self {
            closet: RwLock::new(Closet { outfits, next_id }),
            latency,
        }
    }

    /// Creates a store loaded with the bundled mock closet.
    pub fn seeded(latency: Latency) -> Result<Self, DomainError> {
        Ok(Self::with_outfits(seed::outfits()?, latency))
    }

    /// Number of stored outfits.
    pub async fn len(&self) -> usize {
        self.closet.read().await.outfits.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn outfit_not_found(id: OutfitId) -> DomainError {
    DomainError::not_found(ErrorCode::OutfitNotFound, "Outfit", id)
}

fn planning_not_found(outfit_id: OutfitId, planning_id: PlanningId) -> DomainError {
    DomainError::not_found(ErrorCode::PlanningNotFound, "Planning", planning_id)
        .with_detail("outfit_id", outfit_id.to_string())
}

#[async_trait]
impl OutfitRepository for InMemoryOutfitStore {
    async fn get_all(&self) -> Result<Vec<Outfit>, DomainError> {
        pause(self.latency.get_all).await;
        Ok(self.closet.read().await.outfits.clone())
    }

    async fn get_by_id(&self, id: OutfitId) -> Result<Outfit, DomainError> {
        pause(self.latency.get_by_id).await;
        let closet = self.closet.read().await;
        let index = closet.position(id)?;
        Ok(closet.outfits[index].clone())
    }

    async fn create(&self, data: NewOutfit) -> Result<Outfit, DomainError> {
        pause(self.latency.create).await;
        let mut closet = self.closet.write().await;
        let outfit = Outfit::create(OutfitId::new(closet.next_id), data)?;
        closet.next_id += 1;
        closet.outfits.push(outfit.clone());
        Ok(outfit)
    }

    async fn update(&self, id: OutfitId, patch: OutfitPatch) -> Result<Outfit, DomainError> {
        pause(self.latency.update).await;
        let mut closet = self.closet.write().await;
        let index = closet.position(id)?;
        let outfit = &mut closet.outfits[index];
        outfit.apply(patch)?;
        Ok(outfit.clone())
    }

    async fn delete(&self, id: OutfitId) -> Result<(), DomainError> {
        pause(self.latency.delete).await;
        let mut closet = self.closet.write().await;
        let index = closet.position(id)?;
        closet.outfits.remove(index);
        Ok(())
    }

    async fn get_by_temperature_range(&self, temperature_c: i32) -> Result<Vec<Outfit>, DomainError> {
        pause(self.latency.query).await;
        let signature = TemperatureBand::of(temperature_c).signature_tags();
        if signature.is_empty() {
            return Ok(Vec::new());
        }
        let closet = self.closet.read().await;
        Ok(closet
            .outfits
            .iter()
            .filter(|o| o.tags.intersects(signature))
            .cloned()
            .collect())
    }

    async fn get_by_weather_condition(
        &self,
        condition: &WeatherCondition,
    ) -> Result<Vec<Outfit>, DomainError> {
        pause(self.latency.query).await;
        let closet = self.closet.read().await;
        Ok(closet
            .outfits
            .iter()
            .filter(|o| suits_condition(&o.tags, condition))
            .cloned()
            .collect())
    }

    async fn get_planning_data(&self) -> Result<Vec<Outfit>, DomainError> {
        pause(self.latency.planning).await;
        let closet = self.closet.read().await;
        Ok(closet
            .outfits
            .iter()
            .filter(|o| o.is_planned())
            .cloned()
            .collect())
    }

    async fn create_planning(
        &self,
        outfit_id: OutfitId,
        data: NewPlanning,
    ) -> Result<PlanningEntry, DomainError> {
        pause(self.latency.planning).await;
        let mut closet = self.closet.write().await;
        let index = closet.position(outfit_id)?;
        Ok(closet.outfits[index].add_planning(data).clone())
    }

    async fn update_planning(
        &self,
        outfit_id: OutfitId,
        planning_id: PlanningId,
        patch: PlanningPatch,
    ) -> Result<PlanningEntry, DomainError> {
        pause(self.latency.planning).await;
        let mut closet = self.closet.write().await;
        let index = closet.position(outfit_id)?;
        closet.outfits[index]
            .update_planning(planning_id, patch)
            .cloned()
            .ok_or_else(|| planning_not_found(outfit_id, planning_id))
    }

    async fn delete_planning(
        &self,
        outfit_id: OutfitId,
        planning_id: PlanningId,
    ) -> Result<(), DomainError> {
        pause(self.latency.planning).await;
        let mut closet = self.closet.write().await;
        let index = closet.position(outfit_id)?;
        if closet.outfits[index].remove_planning(planning_id) {
            Ok(())
        } else {
            Err(planning_not_found(outfit_id, planning_id))
        }
    }
}
