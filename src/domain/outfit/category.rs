//! Outfit category labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Fixed set of clothing categories an outfit can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Top,
    Bottom,
    Dress,
    Shoes,
    Accessories,
    Outerwear,
    #[serde(rename = "Full Outfit")]
    FullOutfit,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 7] = [
        Category::Top,
        Category::Bottom,
        Category::Dress,
        Category::Shoes,
        Category::Accessories,
        Category::Outerwear,
        Category::FullOutfit,
    ];

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Top => "Top",
            Category::Bottom => "Bottom",
            Category::Dress => "Dress",
            Category::Shoes => "Shoes",
            Category::Accessories => "Accessories",
            Category::Outerwear => "Outerwear",
            Category::FullOutfit => "Full Outfit",
        }
    }

    /// Emoji shown next to the label in pickers.
    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Top => "👕",
            Category::Bottom => "👖",
            Category::Dress => "👗",
            Category::Shoes => "👠",
            Category::Accessories => "👜",
            Category::Outerwear => "🧥",
            Category::FullOutfit => "✨",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::invalid_format("category", format!("unknown category '{}'", s)))
    }
}
