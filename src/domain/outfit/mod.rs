//! Outfit module - the closet catalog.
//!
//! - `Outfit` - a cataloged look (image, category, tags, rating, history)
//! - `PlanningEntry` - an outfit scheduled onto a calendar date
//! - `ClosetFilter` - search and tag filtering for the closet grid
//! - `planned_on` / `planned_in_month` - calendar grouping

mod calendar;
mod category;
mod errors;
#[allow(clippy::module_inception)]
mod outfit;
mod planning;
mod search;

pub use calendar::{planned_in_month, planned_on, PlannedOutfit};
pub use category::Category;
pub use errors::OutfitError;
pub use outfit::{NewOutfit, Outfit, OutfitPatch};
pub use planning::{NewPlanning, PlanningEntry, PlanningPatch};
pub use search::ClosetFilter;
