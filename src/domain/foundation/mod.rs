//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the closet domain.

mod errors;
mod ids;
mod rating;
mod tags;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{next_id_after, ElementId, MoodboardId, OutfitId, PlanningId};
pub use rating::Rating;
pub use tags::TagSet;
pub use timestamp::Timestamp;
