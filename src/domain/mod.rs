//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, ratings, tags, timestamps, errors)
//! - `outfit` - Closet items, planning entries, search and calendar views
//! - `weather` - Readings and the temperature/condition suitability rules
//! - `recommendation` - Look-of-the-day selection and captions
//! - `persona` - Style quiz and persona classification
//! - `moodboard` - Free-form canvases of outfits and decorations
//! - `lookbook` - Chronological timeline and summary stats

pub mod foundation;
pub mod lookbook;
pub mod moodboard;
pub mod outfit;
pub mod persona;
pub mod recommendation;
pub mod weather;
