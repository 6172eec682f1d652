//! Canvas elements placed on a moodboard.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{ElementId, OutfitId, ValidationError};

/// Edge length of an item dropped onto the canvas without an explicit size.
pub const DEFAULT_ITEM_SIZE: f64 = 100.0;

/// Decorative glyph types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorationKind {
    Heart,
    Sparkle,
    Star,
    Flower,
    Bow,
}

impl DecorationKind {
    pub const ALL: [DecorationKind; 5] = [
        DecorationKind::Heart,
        DecorationKind::Sparkle,
        DecorationKind::Star,
        DecorationKind::Flower,
        DecorationKind::Bow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DecorationKind::Heart => "heart",
            DecorationKind::Sparkle => "sparkle",
            DecorationKind::Star => "star",
            DecorationKind::Flower => "flower",
            DecorationKind::Bow => "bow",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            DecorationKind::Heart => "💖",
            DecorationKind::Sparkle => "✨",
            DecorationKind::Star => "⭐",
            DecorationKind::Flower => "🌸",
            DecorationKind::Bow => "🎀",
        }
    }
}

impl fmt::Display for DecorationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecorationKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        DecorationKind::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| ValidationError::invalid_format("kind", format!("unknown decoration '{}'", s)))
    }
}

/// An outfit image placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub id: ElementId,
    pub outfit_id: OutfitId,
    pub image_url: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A decorative glyph on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    pub id: ElementId,
    pub kind: DecorationKind,
    pub x: f64,
    pub y: f64,
    /// Degrees in `[0, 360)`.
    pub rotation: f64,
}

/// Request to place an outfit on the canvas.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemPlacement {
    pub outfit_id: OutfitId,
    pub image_url: String,
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_size")]
    pub width: f64,
    #[serde(default = "default_size")]
    pub height: f64,
}

fn default_size() -> f64 {
    DEFAULT_ITEM_SIZE
}

impl ItemPlacement {
    /// Default-sized item centred on a drop point.
    pub fn dropped_at(outfit_id: OutfitId, image_url: impl Into<String>, x: f64, y: f64) -> Self {
        let half = DEFAULT_ITEM_SIZE / 2.0;
        Self {
            outfit_id,
            image_url: image_url.into(),
            x: x - half,
            y: y - half,
            width: DEFAULT_ITEM_SIZE,
            height: DEFAULT_ITEM_SIZE,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.image_url.trim().is_empty() {
            return Err(ValidationError::empty_field("image_url"));
        }
        check_finite("x", self.x)?;
        check_finite("y", self.y)?;
        check_size("width", self.width)?;
        check_size("height", self.height)
    }
}

/// Request to add a decoration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DecorationPlacement {
    pub kind: DecorationKind,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
}

impl DecorationPlacement {
    pub fn new(kind: DecorationKind, x: f64, y: f64, rotation: f64) -> Self {
        Self { kind, x, y, rotation }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_finite("x", self.x)?;
        check_finite("y", self.y)?;
        check_finite("rotation", self.rotation)
    }
}

/// Wraps any angle into `[0, 360)`.
pub fn normalize_rotation(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

pub(super) fn check_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::invalid_format(field, "must be a finite number"))
    }
}

pub(super) fn check_size(field: &str, value: f64) -> Result<(), ValidationError> {
    check_finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::invalid_format(field, "must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_into_range() {
        assert_eq!(normalize_rotation(370.0), 10.0);
        assert_eq!(normalize_rotation(-90.0), 270.0);
        assert_eq!(normalize_rotation(360.0), 0.0);
        assert_eq!(normalize_rotation(45.5), 45.5);
        let tiny = normalize_rotation(-1e-20);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn drop_centres_default_item() {
        let placement = ItemPlacement::dropped_at(OutfitId::new(3), "https://img.test/3.jpg", 200.0, 150.0);
        assert_eq!((placement.x, placement.y), (150.0, 100.0));
        assert_eq!((placement.width, placement.height), (100.0, 100.0));
    }

    #[test]
    fn placement_rejects_bad_sizes() {
        let mut placement = ItemPlacement::dropped_at(OutfitId::new(1), "https://img.test/1.jpg", 0.0, 0.0);
        placement.width = 0.0;
        assert!(placement.validate().is_err());
        placement.width = 10.0;
        placement.x = f64::NAN;
        assert!(placement.validate().is_err());
    }

    #[test]
    fn decoration_kind_parses_and_serializes_lowercase() {
        assert_eq!("Bow".parse::<DecorationKind>().unwrap(), DecorationKind::Bow);
        assert!("unicorn".parse::<DecorationKind>().is_err());
        assert_eq!(serde_json::to_value(DecorationKind::Sparkle).unwrap(), "sparkle");
    }

    #[test]
    fn placement_size_defaults_when_missing() {
        let placement: ItemPlacement =
            serde_json::from_str(r#"{"outfit_id":2,"image_url":"u","x":1.0,"y":2.0}"#).unwrap();
        assert_eq!(placement.width, DEFAULT_ITEM_SIZE);
    }
}
