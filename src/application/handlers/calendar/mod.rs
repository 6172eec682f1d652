//! Calendar command and query handlers.

mod get_calendar;
mod plan_outfit;

pub use get_calendar::{GetCalendarHandler, GetDayPlanQuery, GetMonthPlanQuery};
pub use plan_outfit::{
    DeletePlanningCommand, DeletePlanningHandler, PlanOutfitCommand, PlanOutfitHandler,
    UpdatePlanningCommand, UpdatePlanningHandler,
};
