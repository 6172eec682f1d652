//! Summary figures shown above the lookbook and on the home page.

use serde::Serialize;
use std::collections::HashSet;

use crate::domain::foundation::Timestamp;
use crate::domain::outfit::{Category, Outfit};

/// Label used when there is no top category.
pub const NO_CATEGORY: &str = "None";

/// Lookbook header statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookbookStats {
    pub total: usize,
    pub favorites: usize,
    pub this_month: usize,
    pub top_category: String,
}

impl LookbookStats {
    pub fn compute(outfits: &[Outfit], today: &Timestamp) -> Self {
        Self {
            total: outfits.len(),
            favorites: outfits.iter().filter(|o| o.is_favorite()).count(),
            this_month: outfits
                .iter()
                .filter(|o| o.date_added.same_month_as(today))
                .count(),
            top_category: top_category(outfits)
                .map(|c| c.label().to_string())
                .unwrap_or_else(|| NO_CATEGORY.to_string()),
        }
    }
}

/// Most common category. Ties go to the category seen first.
pub fn top_category(outfits: &[Outfit]) -> Option<Category> {
    let mut counts: Vec<(Category, usize)> = Vec::new();
    for outfit in outfits {
        match counts.iter_mut().find(|(c, _)| *c == outfit.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((outfit.category, 1)),
        }
    }
    let mut best: Option<(Category, usize)> = None;
    for (category, count) in counts {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((category, count));
        }
    }
    best.map(|(c, _)| c)
}

/// Quick stats for the look-of-the-day page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClosetStats {
    pub total_looks: usize,
    pub favorites: usize,
    pub style_tags: usize,
}

impl ClosetStats {
    pub fn compute(outfits: &[Outfit]) -> Self {
        let tags: HashSet<&str> = outfits.iter().flat_map(|o| o.tags.iter()).collect();
        Self {
            total_looks: outfits.len(),
            favorites: outfits.iter().filter(|o| o.is_favorite()).count(),
            style_tags: tags.len(),
        }
    }
}
