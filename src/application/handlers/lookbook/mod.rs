//! Lookbook query handler.

mod get_lookbook;

pub use get_lookbook::{GetLookbookHandler, GetLookbookQuery, LookbookView};
