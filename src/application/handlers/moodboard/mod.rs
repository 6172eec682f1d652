//! Moodboard command and query handlers.

mod edit_canvas;
mod manage_moodboard;

pub use edit_canvas::{
    AddDecorationCommand, AddDecorationHandler, ArrangeItemCommand, ArrangeItemHandler,
    CanvasEditResult, PlaceItemCommand, PlaceItemHandler, RemoveElementCommand, RemoveElementHandler,
};
pub use manage_moodboard::{
    CreateMoodboardCommand, CreateMoodboardHandler, DeleteMoodboardCommand, DeleteMoodboardHandler,
    GetMoodboardsHandler, UpdateMoodboardCommand, UpdateMoodboardHandler,
};
