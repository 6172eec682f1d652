//! Rating value object for outfits (0 to 5 hearts, 0 = unrated).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Outfit rating: 0 (unrated) up to 5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Highest rating an outfit can receive.
    pub const MAX: u8 = 5;

    /// Ratings at or above this value count as favorites.
    pub const FAVORITE_THRESHOLD: u8 = 4;

    /// An unrated outfit.
    pub const UNRATED: Rating = Rating(0);

    /// Creates a Rating, returning error if out of range.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if value > Self::MAX {
            return Err(ValidationError::out_of_range(
                "rating",
                0,
                Self::MAX as i32,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns true if the outfit has not been rated.
    pub fn is_unrated(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if this rating marks a favorite.
    pub fn is_favorite(&self) -> bool {
        self.0 >= Self::FAVORITE_THRESHOLD
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}
