//! Bundled mock dataset.

use serde::de::DeserializeOwned;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::moodboard::Moodboard;
use crate::domain::outfit::Outfit;

const OUTFITS_JSON: &str = include_str!("../../../data/outfits.json");
const MOODBOARDS_JSON: &str = include_str!("../../../data/moodboards.json");

pub fn outfits() -> Result<Vec<Outfit>, DomainError> {
    parse("outfits", OUTFITS_JSON)
}

pub fn moodboards() -> Result<Vec<Moodboard>, DomainError> {
    parse("moodboards", MOODBOARDS_JSON)
}

fn parse<T: DeserializeOwned>(name: &str, json: &str) -> Result<Vec<T>, DomainError> {
    serde_json::from_str(json).map_err(|e| {
        DomainError::new(
            ErrorCode::InternalError,
            format!("Invalid {} seed data: {}", name, e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn outfit_seed_parses_with_unique_ids() {
        let outfits = outfits().unwrap();
        assert!(!outfits.is_empty());
        let ids: HashSet<_> = outfits.iter().map(|o| o.id).collect();
        assert_eq!(ids.len(), outfits.len());
    }

    #[test]
    fn moodboard_seed_parses() {
        let boards = moodboards().unwrap();
        assert_eq!(boards.len(), 2);
        assert!(boards.iter().all(|b| b.element_count() > 0));
    }
}
