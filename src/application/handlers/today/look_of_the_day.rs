//! LookOfTheDayHandler - the recommendation pipeline.
//!
//! Weather is resolved first because it decides which store query runs.
//! With a live reading the store is asked for the temperature band's
//! outfits, then for the sky condition's, then for everything; a query that
//! errors or comes back empty falls through to the next one. Selection and
//! captioning then run over whichever pool was obtained.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::outfit::Outfit;
use crate::domain::recommendation::{caption, pick_outfit};
use crate::domain::weather::WeatherReading;
use crate::ports::OutfitRepository;

use super::super::weather::{ResolveWeatherHandler, ResolvedWeather, WeatherNotice};
use super::errors::TodayError;

/// Caption for the empty state.
pub const EMPTY_CLOSET_MESSAGE: &str = "No outfits to suggest! 💔";

const WEATHER_SMART_HEADLINE: &str = "Weather-smart style suggestions just for you!";
const ORACLE_HEADLINE: &str = "Your personal style oracle has spoken!";

/// What the today page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookOfTheDay {
    /// None renders the empty state.
    pub outfit: Option<Outfit>,
    pub caption: String,
    /// Displayed reading; the fallback when weather could not be resolved.
    pub weather: WeatherReading,
    /// True when the pick was filtered against a live reading.
    pub weather_smart: bool,
    pub notice: Option<WeatherNotice>,
    pub pool_size: usize,
}

impl LookOfTheDay {
    pub fn headline(&self) -> &'static str {
        if self.weather_smart {
            WEATHER_SMART_HEADLINE
        } else {
            ORACLE_HEADLINE
        }
    }
}

/// A look plus the inputs needed to reshuffle it.
#[derive(Debug, Clone)]
pub struct LookOfTheDayResult {
    pub look: LookOfTheDay,
    pub candidates: Vec<Outfit>,
    pub weather: ResolvedWeather,
}

/// Handler running weather, candidate query, selection and caption.
pub struct LookOfTheDayHandler {
    weather: Arc<ResolveWeatherHandler>,
    repository: Arc<dyn OutfitRepository>,
    rng: Mutex<StdRng>,
}

impl LookOfTheDayHandler {
    pub fn new(weather: Arc<ResolveWeatherHandler>, repository: Arc<dyn OutfitRepository>) -> Self {
        Self {
            weather,
            repository,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Fixes the random source, for reproducible picks.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub async fn handle(&self) -> Result<LookOfTheDayResult, TodayError> {
        let weather = self.weather.handle().await;
        let candidates = self.candidates(weather.live_reading()).await?;
        let look = self.compose(&candidates, &weather);

        tracing::info!(
            pool_size = candidates.len(),
            weather_smart = look.weather_smart,
            outfit_id = ?look.outfit.as_ref().map(|o| o.id.value()),
            "look of the day selected"
        );

        Ok(LookOfTheDayResult {
            look,
            candidates,
            weather,
        })
    }

    /// Picks and captions from an already fetched pool.
    ///
    /// The same outfit may come up again; there is no exclusion of the
    /// previous pick.
    pub fn compose(&self, candidates: &[Outfit], weather: &ResolvedWeather) -> LookOfTheDay {
        let live = weather.live_reading();
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        let outfit = pick_outfit(candidates, live, &mut *rng);
        let caption = match &outfit {
            Some(outfit) => caption(Some(outfit), live, &mut *rng),
            None => EMPTY_CLOSET_MESSAGE.to_string(),
        };

        LookOfTheDay {
            outfit,
            caption,
            weather: weather.reading.clone(),
            weather_smart: live.is_some(),
            notice: weather.notice.clone(),
            pool_size: candidates.len(),
        }
    }

    async fn candidates(&self, reading: Option<&WeatherReading>) -> Result<Vec<Outfit>, TodayError> {
        if let Some(reading) = reading {
            match self
                .repository
                .get_by_temperature_range(reading.temperature_c)
                .await
            {
                Ok(outfits) if !outfits.is_empty() => return Ok(outfits),
                Ok(_) => tracing::debug!(
                    temperature_c = reading.temperature_c,
                    "no outfits for temperature band, trying condition"
                ),
                Err(error) => tracing::warn!(%error, "temperature query failed, trying condition"),
            }

            match self
                .repository
                .get_by_weather_condition(&reading.condition)
                .await
            {
                Ok(outfits) if !outfits.is_empty() => return Ok(outfits),
                Ok(_) => tracing::debug!(
                    condition = reading.condition.as_str(),
                    "no outfits for condition, using whole closet"
                ),
                Err(error) => tracing::warn!(%error, "condition query failed, using whole closet"),
            }
        }

        Ok(self.repository.get_all().await?)
    }
}

#[cfg(test)]
pub(super) mod tests {
    use super::*;
    use crate::adapters::weather::MockWeatherProvider;
    use crate::domain::foundation::{DomainError, ErrorCode, OutfitId, PlanningId, TagSet, Timestamp};
    use crate::domain::outfit::{
        Category, NewOutfit, NewPlanning, OutfitPatch, PlanningEntry, PlanningPatch,
    };
    use crate::domain::weather::{is_appropriate, suits_condition, TemperatureBand, WeatherCondition};
    use crate::ports::WeatherError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::time::Duration;

    pub(in crate::application::handlers::today) fn outfit(id: u32, tags: &[&str]) -> Outfit {
        Outfit::create(
            OutfitId::new(id),
            NewOutfit {
                image_url: format!("https://img.example/{id}.jpg"),
                category: Category::FullOutfit,
                notes: String::new(),
                tags: TagSet::from_tags(tags.iter().copied()),
                rating: None,
                date_added: Some(Timestamp::now()),
                worn_dates: None,
            },
        )
        .unwrap()
    }

    /// Closet mock with failure switches, a call log and per-call delays.
    #[derive(Default)]
    pub(in crate::application::handlers::today) struct MockCloset {
        pub outfits: Vec<Outfit>,
        pub fail_temperature: bool,
        pub fail_condition: bool,
        pub fail_all: bool,
        pub calls: Mutex<Vec<&'static str>>,
        pub get_all_delays: Mutex<VecDeque<Duration>>,
    }

    impl MockCloset {
        pub fn with(outfits: Vec<Outfit>) -> Self {
            Self {
                outfits,
                ..Default::default()
            }
        }

        pub fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }

        fn failure() -> DomainError {
            DomainError::new(ErrorCode::StoreError, "simulated outage")
        }
    }

    #[async_trait]
    impl OutfitRepository for MockCloset {
        async fn get_all(&self) -> Result<Vec<Outfit>, DomainError> {
            self.record("all");
            let delay = self.get_all_delays.lock().unwrap().pop_front();
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail_all {
                return Err(Self::failure());
            }
            Ok(self.outfits.clone())
        }

        async fn get_by_id(&self, id: OutfitId) -> Result<Outfit, DomainError> {
            self.outfits
                .iter()
                .find(|o| o.id == id)
                .cloned()
                .ok_or_else(|| DomainError::not_found(ErrorCode::OutfitNotFound, "Outfit", id))
        }

        async fn create(&self, _data: NewOutfit) -> Result<Outfit, DomainError> {
            unimplemented!()
        }

        async fn update(&self, _id: OutfitId, _patch: OutfitPatch) -> Result<Outfit, DomainError> {
            unimplemented!()
        }

        async fn delete(&self, _id: OutfitId) -> Result<(), DomainError> {
            unimplemented!()
        }

        async fn get_by_temperature_range(&self, temperature_c: i32) -> Result<Vec<Outfit>, DomainError> {
            self.record("temperature");
            if self.fail_temperature {
                return Err(Self::failure());
            }
            let band = TemperatureBand::of(temperature_c);
            Ok(self
                .outfits
                .iter()
                .filter(|o| o.tags.intersects(band.signature_tags()))
                .cloned()
                .collect())
        }

        async fn get_by_weather_condition(
            &self,
            condition: &WeatherCondition,
        ) -> Result<Vec<Outfit>, DomainError> {
            self.record("condition");
            if self.fail_condition {
                return Err(Self::failure());
            }
            Ok(self
                .outfits
                .iter()
                .filter(|o| suits_condition(&o.tags, condition))
                .cloned()
                .collect())
        }

        async fn get_planning_data(&self) -> Result<Vec<Outfit>, DomainError> {
            unimplemented!()
        }

        async fn create_planning(
            &self,
            _outfit_id: OutfitId,
            _data: NewPlanning,
        ) -> Result<PlanningEntry, DomainError> {
            unimplemented!()
        }

        async fn update_planning(
            &self,
            _outfit_id: OutfitId,
            _planning_id: PlanningId,
            _patch: PlanningPatch,
        ) -> Result<PlanningEntry, DomainError> {
            unimplemented!()
        }

        async fn delete_planning(
            &self,
            _outfit_id: OutfitId,
            _planning_id: PlanningId,
        ) -> Result<(), DomainError> {
            unimplemented!()
        }
    }

    pub(in crate::application::handlers::today) fn closet() -> Vec<Outfit> {
        vec![
            outfit(1, &["winter", "coat"]),
            outfit(2, &["summer", "tank", "white"]),
            outfit(3, &["y2k", "denim"]),
            outfit(4, &["white", "delicate"]),
        ]
    }

    pub(in crate::application::handlers::today) fn weather_handler(
        provider: MockWeatherProvider,
    ) -> Arc<ResolveWeatherHandler> {
        Arc::new(ResolveWeatherHandler::new(
            Arc::new(provider),
            Duration::from_secs(1),
            WeatherReading::new(22, WeatherCondition::Clear, "Default Location"),
        ))
    }

    fn handler(reading: Option<WeatherReading>, repo: Arc<MockCloset>) -> LookOfTheDayHandler {
        let provider = match reading {
            Some(reading) => MockWeatherProvider::new().with_reading(reading),
            None => MockWeatherProvider::new().with_error(WeatherError::PermissionDenied),
        };
        LookOfTheDayHandler::new(weather_handler(provider), repo).with_seed(7)
    }

    #[tokio::test]
    async fn cold_day_uses_temperature_query() {
        let repo = Arc::new(MockCloset::with(closet()));
        let reading = WeatherReading::new(4, WeatherCondition::Clear, "Oslo");
        let result = handler(Some(reading.clone()), repo.clone()).handle().await.unwrap();

        assert_eq!(repo.calls(), vec!["temperature"]);
        assert_eq!(result.candidates.len(), 1);
        let look = result.look;
        assert_eq!(look.outfit.as_ref().unwrap().id, OutfitId::new(1));
        assert!(look.weather_smart);
        assert!(look.caption.contains("4°C"));
        assert_eq!(look.headline(), WEATHER_SMART_HEADLINE);
    }

    #[tokio::test]
    async fn mild_day_falls_through_to_condition_query() {
        let repo = Arc::new(MockCloset::with(closet()));
        let reading = WeatherReading::new(22, WeatherCondition::Rain, "London");
        let result = handler(Some(reading.clone()), repo.clone()).handle().await.unwrap();

        assert_eq!(repo.calls(), vec!["temperature", "condition"]);
        let picked = result.look.outfit.unwrap();
        assert!(is_appropriate(&picked, &reading));
        assert!(!picked.tags.contains("white"));
    }

    #[tokio::test]
    async fn query_errors_fall_through_to_whole_closet() {
        let repo = Arc::new(MockCloset {
            fail_temperature: true,
            fail_condition: true,
            ..MockCloset::with(closet())
        });
        let reading = WeatherReading::new(30, WeatherCondition::Clear, "Seville");
        let result = handler(Some(reading), repo.clone()).handle().await.unwrap();

        assert_eq!(repo.calls(), vec!["temperature", "condition", "all"]);
        assert_eq!(result.candidates.len(), 4);
        assert!(result.look.outfit.is_some());
    }

    #[tokio::test]
    async fn weather_failure_skips_filtering_and_sets_notice() {
        let repo = Arc::new(MockCloset::with(closet()));
        let result = handler(None, repo.clone()).handle().await.unwrap();

        assert_eq!(repo.calls(), vec!["all"]);
        let look = result.look;
        assert!(!look.weather_smart);
        assert_eq!(look.weather.temperature_c, 22);
        assert_eq!(look.notice.as_ref().unwrap().kind, "permission_denied");
        assert_eq!(look.headline(), ORACLE_HEADLINE);
        assert!(!look.caption.contains("°C"));
    }

    #[tokio::test]
    async fn empty_closet_yields_empty_state() {
        let repo = Arc::new(MockCloset::default());
        let result = handler(None, repo).handle().await.unwrap();
        assert!(result.look.outfit.is_none());
        assert_eq!(result.look.caption, EMPTY_CLOSET_MESSAGE);
        assert_eq!(result.look.pool_size, 0);
    }

    #[tokio::test]
    async fn closet_failure_is_retryable_error() {
        let repo = Arc::new(MockCloset {
            fail_all: true,
            ..MockCloset::with(closet())
        });
        let err = handler(None, repo).handle().await.unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(err.code(), ErrorCode::StoreError);
        assert_eq!(err.message(), super::super::errors::LOAD_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn same_seed_same_pick() {
        let first = handler(None, Arc::new(MockCloset::with(closet())))
            .handle()
            .await
            .unwrap();
        let second = handler(None, Arc::new(MockCloset::with(closet())))
            .handle()
            .await
            .unwrap();
        assert_eq!(
            first.look.outfit.map(|o| o.id),
            second.look.outfit.map(|o| o.id)
        );
        assert_eq!(first.look.caption, second.look.caption);
    }
}
