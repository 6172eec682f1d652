//! Look of the day handlers.

mod errors;
mod look_of_the_day;
mod today_view;

pub use errors::{TodayError, LOAD_FAILED_MESSAGE};
pub use look_of_the_day::{LookOfTheDay, LookOfTheDayHandler, LookOfTheDayResult, EMPTY_CLOSET_MESSAGE};
pub use today_view::{Refreshed, TodayView};
