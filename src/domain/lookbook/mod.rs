//! Lookbook module - the timeline view over the closet.

mod stats;
mod timeline;

pub use stats::{top_category, ClosetStats, LookbookStats, NO_CATEGORY};
pub use timeline::{group_by_day, timeline, DayGroup, LookbookFilter};
