//! Application layer - Commands, Queries, and Handlers.
//!
//! Handlers orchestrate domain operations over the ports. Write handlers
//! take a command struct; read handlers take a query struct or nothing.

pub mod handlers;

pub use handlers::calendar::{
    DeletePlanningCommand, DeletePlanningHandler, GetCalendarHandler, GetDayPlanQuery,
    GetMonthPlanQuery, PlanOutfitCommand, PlanOutfitHandler, UpdatePlanningCommand,
    UpdatePlanningHandler,
};
pub use handlers::closet::{
    CreateOutfitCommand, CreateOutfitHandler, DeleteOutfitCommand, DeleteOutfitHandler,
    GetClosetStatsHandler, GetOutfitHandler, GetOutfitQuery, MarkWornCommand, MarkWornHandler,
    SearchClosetHandler, SearchClosetQuery, UpdateOutfitCommand, UpdateOutfitHandler,
};
pub use handlers::lookbook::{GetLookbookHandler, GetLookbookQuery, LookbookView};
pub use handlers::moodboard::{
    AddDecorationCommand, AddDecorationHandler, ArrangeItemCommand, ArrangeItemHandler,
    CanvasEditResult, CreateMoodboardCommand, CreateMoodboardHandler, DeleteMoodboardCommand,
    DeleteMoodboardHandler, GetMoodboardsHandler, PlaceItemCommand, PlaceItemHandler,
    RemoveElementCommand, RemoveElementHandler, UpdateMoodboardCommand, UpdateMoodboardHandler,
};
pub use handlers::persona::{ClassifyPersonaCommand, ClassifyPersonaHandler};
pub use handlers::today::{
    LookOfTheDay, LookOfTheDayHandler, LookOfTheDayResult, Refreshed, TodayError, TodayView,
    EMPTY_CLOSET_MESSAGE, LOAD_FAILED_MESSAGE,
};
pub use handlers::weather::{ResolveWeatherHandler, ResolvedWeather, WeatherNotice};
