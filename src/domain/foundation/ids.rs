//! Strongly-typed identifier value objects.
//!
//! Identifiers in the closet are small positive integers. Outfit and
//! moodboard ids are unique within their collection; planning entry and
//! moodboard element ids are only unique within their owning record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Generates a positive integer identifier newtype.
macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Creates an identifier from its raw value.
            pub fn new(value: u32) -> Self {
                Self(value)
            }

            /// Returns the raw value.
            pub fn value(&self) -> u32 {
                self.0
            }

            /// Returns the identifier that follows this one.
            pub fn next(&self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }
    };
}

numeric_id!(
    /// Unique identifier for an outfit in the closet.
    OutfitId
);

numeric_id!(
    /// Unique identifier for a moodboard.
    MoodboardId
);

numeric_id!(
    /// Identifier of a planning entry, scoped to its owning outfit.
    PlanningId
);

numeric_id!(
    /// Identifier of a placed item or decoration, scoped to its moodboard.
    ElementId
);

/// Returns the successor of the largest id in `ids`, or 1 for an empty set.
pub fn next_id_after<I, T>(ids: I) -> u32
where
    I: IntoIterator<Item = T>,
    T: Into<u32>,
{
    ids.into_iter().map(Into::into).max().unwrap_or(0) + 1
}

impl From<OutfitId> for u32 {
    fn from(id: OutfitId) -> Self {
        id.0
    }
}

impl From<MoodboardId> for u32 {
    fn from(id: MoodboardId) -> Self {
        id.0
    }
}

impl From<PlanningId> for u32 {
    fn from(id: PlanningId) -> Self {
        id.0
    }
}

impl From<ElementId> for u32 {
    fn from(id: ElementId) -> Self {
        id.0
    }
}
