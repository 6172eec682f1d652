//! Calendar grouping of planned outfits.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

use super::{Outfit, PlanningEntry};

/// An outfit paired with one of its planning entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedOutfit {
    pub outfit: Outfit,
    pub planning: PlanningEntry,
}

/// Every (outfit, entry) pair scheduled on `date`, in store order.
pub fn planned_on(outfits: &[Outfit], date: NaiveDate) -> Vec<PlannedOutfit> {
    outfits
        .iter()
        .flat_map(|outfit| {
            outfit
                .planned_dates
                .iter()
                .filter(move |p| p.date == date)
                .map(move |p| PlannedOutfit {
                    outfit: outfit.clone(),
                    planning: p.clone(),
                })
        })
        .collect()
}

/// Planned outfits for a month, keyed by date in ascending order.
pub fn planned_in_month(
    outfits: &[Outfit],
    year: i32,
    month: u32,
) -> BTreeMap<NaiveDate, Vec<PlannedOutfit>> {
    let mut days: BTreeMap<NaiveDate, Vec<PlannedOutfit>> = BTreeMap::new();
    for outfit in outfits {
        for planning in &outfit.planned_dates {
            if planning.date.year() == year && planning.date.month() == month {
                days.entry(planning.date).or_default().push(PlannedOutfit {
                    outfit: outfit.clone(),
                    planning: planning.clone(),
                });
            }
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::OutfitId;
    use crate::domain::outfit::{Category, NewOutfit, NewPlanning};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn planned(id: u32, days: &[NaiveDate]) -> Outfit {
        let mut outfit = Outfit::create(
            OutfitId::new(id),
            NewOutfit::new("https://img.example/p.jpg", Category::FullOutfit),
        )
        .unwrap();
        for day in days {
            outfit.add_planning(NewPlanning::new(*day));
        }
        outfit
    }

    #[test]
    fn planned_on_collects_all_outfits_for_date() {
        let outfits = vec![
            planned(1, &[date(2024, 6, 1), date(2024, 6, 2)]),
            planned(2, &[date(2024, 6, 1)]),
            planned(3, &[]),
        ];
        let result = planned_on(&outfits, date(2024, 6, 1));
        let ids: Vec<u32> = result.iter().map(|p| p.outfit.id.value()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn same_outfit_can_appear_twice_on_one_date() {
        let outfits = vec![planned(1, &[date(2024, 6, 1), date(2024, 6, 1)])];
        assert_eq!(planned_on(&outfits, date(2024, 6, 1)).len(), 2);
    }

    #[test]
    fn planned_in_month_groups_by_day() {
        let outfits = vec![
            planned(1, &[date(2024, 6, 1), date(2024, 7, 1)]),
            planned(2, &[date(2024, 6, 15), date(2024, 6, 1)]),
        ];
        let june = planned_in_month(&outfits, 2024, 6);
        assert_eq!(june.len(), 2);
        assert_eq!(june[&date(2024, 6, 1)].len(), 2);
        assert_eq!(june[&date(2024, 6, 15)].len(), 1);
        assert_eq!(june.keys().next(), Some(&date(2024, 6, 1)));
    }
}
