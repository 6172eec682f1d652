//! Command and query handlers, grouped by page.

pub mod calendar;
pub mod closet;
pub mod lookbook;
pub mod moodboard;
pub mod persona;
pub mod today;
pub mod weather;
