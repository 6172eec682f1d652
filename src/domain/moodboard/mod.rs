//! Moodboard module - collages of outfit images and decorations.

mod canvas;
mod errors;
#[allow(clippy::module_inception)]
mod moodboard;

pub use canvas::{
    normalize_rotation, Decoration, DecorationKind, DecorationPlacement, ItemPlacement, PlacedItem,
    DEFAULT_ITEM_SIZE,
};
pub use errors::MoodboardError;
pub use moodboard::{Moodboard, MoodboardPatch, NewMoodboard};
