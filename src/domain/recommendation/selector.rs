//! Recommendation selector - picks the look of the day from a pool.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::outfit::Outfit;
use crate::domain::weather::{is_appropriate, WeatherReading};

/// Picks one outfit uniformly at random.
///
/// With a reading, outfits passing the appropriateness filter are preferred;
/// when none pass, the whole pool is used. Returns `None` only for an empty
/// pool. Previous picks are never excluded, so a shuffle may land on the
/// same outfit again.
pub fn pick_outfit<R>(pool: &[Outfit], weather: Option<&WeatherReading>, rng: &mut R) -> Option<Outfit>
where
    R: Rng + ?Sized,
{
    if let Some(reading) = weather {
        if let Some(outfit) = weather_appropriate(pool, reading).choose(rng) {
            return Some((*outfit).clone());
        }
    }
    pool.choose(rng).cloned()
}

/// Outfits from `pool` that suit the reading, in pool order.
pub fn weather_appropriate<'a>(pool: &'a [Outfit], weather: &WeatherReading) -> Vec<&'a Outfit> {
    pool.iter().filter(|o| is_appropriate(o, weather)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::OutfitId;
    use crate::domain::outfit::{Category, NewOutfit};
    use crate::domain::weather::WeatherCondition;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn outfit(id: u32, tags: &[&str]) -> Outfit {
        Outfit::create(
            OutfitId::new(id),
            NewOutfit::new(format!("https://img.test/{}.jpg", id), Category::FullOutfit)
                .with_tags(tags.iter().copied()),
        )
        .unwrap()
    }

    fn cold() -> WeatherReading {
        WeatherReading::new(3, WeatherCondition::Snow, "Oslo")
    }

    #[test]
    fn empty_pool_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_outfit(&[], None, &mut rng).is_none());
        assert!(pick_outfit(&[], Some(&cold()), &mut rng).is_none());
    }

    #[test]
    fn prefers_weather_appropriate_outfits() {
        let pool = vec![
            outfit(1, &["summer", "tank"]),
            outfit(2, &["cozy", "sweater"]),
            outfit(3, &["beach"]),
        ];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let pick = pick_outfit(&pool, Some(&cold()), &mut rng).unwrap();
            assert_eq!(pick.id, OutfitId::new(2));
        }
    }

    #[test]
    fn falls_back_to_full_pool_when_nothing_fits() {
        let pool = vec![outfit(1, &["summer"]), outfit(2, &["glam"])];
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<OutfitId> = (0..100)
            .filter_map(|_| pick_outfit(&pool, Some(&cold()), &mut rng))
            .map(|o| o.id)
            .collect();
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn without_weather_every_outfit_is_reachable() {
        let pool: Vec<Outfit> = (1..=4).map(|id| outfit(id, &["winter"])).collect();
        let mut rng = StdRng::seed_from_u64(3);
        let seen: HashSet<OutfitId> = (0..200)
            .filter_map(|_| pick_outfit(&pool, None, &mut rng))
            .map(|o| o.id)
            .collect();
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn same_seed_gives_same_pick() {
        let pool: Vec<Outfit> = (1..=10).map(|id| outfit(id, &[])).collect();
        let a = pick_outfit(&pool, None, &mut StdRng::seed_from_u64(99));
        let b = pick_outfit(&pool, None, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn weather_appropriate_keeps_pool_order() {
        let pool = vec![outfit(1, &["coat"]), outfit(2, &["tank"]), outfit(3, &["warm"])];
        let ids: Vec<u32> = weather_appropriate(&pool, &cold())
            .iter()
            .map(|o| o.id.value())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    proptest! {
        #[test]
        fn non_empty_pool_always_yields_a_member(size in 1usize..20, temp in -20i32..45, seed in any::<u64>()) {
            let pool: Vec<Outfit> = (1..=size as u32).map(|id| outfit(id, &["heavy"])).collect();
            let reading = WeatherReading::new(temp, WeatherCondition::Rain, "Anywhere");
            let mut rng = StdRng::seed_from_u64(seed);
            let pick = pick_outfit(&pool, Some(&reading), &mut rng);
            prop_assert!(pick.is_some());
            prop_assert!(pool.contains(&pick.unwrap()));
        }
    }
}
