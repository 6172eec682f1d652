//! Closet command and query handlers.

mod create_outfit;
mod get_outfits;
mod update_outfit;

pub use create_outfit::{CreateOutfitCommand, CreateOutfitHandler};
pub use get_outfits::{
    GetClosetStatsHandler, GetOutfitHandler, GetOutfitQuery, SearchClosetHandler, SearchClosetQuery,
};
pub use update_outfit::{
    DeleteOutfitCommand, DeleteOutfitHandler, MarkWornCommand, MarkWornHandler, UpdateOutfitCommand,
    UpdateOutfitHandler,
};
