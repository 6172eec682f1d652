//! Wiring from ports to the per-resource handler groups.

use std::sync::Arc;

use crate::application::handlers::calendar::{
    DeletePlanningHandler, GetCalendarHandler, PlanOutfitHandler, UpdatePlanningHandler,
};
use crate::application::handlers::closet::{
    CreateOutfitHandler, DeleteOutfitHandler, GetClosetStatsHandler, GetOutfitHandler,
    MarkWornHandler, SearchClosetHandler, UpdateOutfitHandler,
};
use crate::application::handlers::lookbook::GetLookbookHandler;
use crate::application::handlers::moodboard::{
    AddDecorationHandler, ArrangeItemHandler, CreateMoodboardHandler, DeleteMoodboardHandler,
    GetMoodboardsHandler, PlaceItemHandler, RemoveElementHandler, UpdateMoodboardHandler,
};
use crate::application::handlers::persona::ClassifyPersonaHandler;
use crate::application::handlers::today::{LookOfTheDayHandler, TodayView};
use crate::application::handlers::weather::ResolveWeatherHandler;
use crate::ports::{MoodboardRepository, OutfitRepository};

use super::calendar::CalendarHandlers;
use super::closet::ClosetHandlers;
use super::lookbook::LookbookHandlers;
use super::moodboard::MoodboardHandlers;
use super::persona::PersonaHandlers;
use super::today::TodayHandlers;

/// Every handler group the router mounts.
#[derive(Clone)]
pub struct AppState {
    pub closet: ClosetHandlers,
    pub calendar: CalendarHandlers,
    pub moodboard: MoodboardHandlers,
    pub today: TodayHandlers,
    pub persona: PersonaHandlers,
    pub lookbook: LookbookHandlers,
}

impl AppState {
    pub fn new(
        outfits: Arc<dyn OutfitRepository>,
        moodboards: Arc<dyn MoodboardRepository>,
        weather: Arc<ResolveWeatherHandler>,
    ) -> Self {
        let look_handler = LookOfTheDayHandler::new(weather.clone(), outfits.clone());
        Self::with_look_handler(outfits, moodboards, weather, look_handler)
    }

    /// Same as [`AppState::new`] with a caller-built look-of-the-day handler,
    /// e.g. one with a fixed seed.
    pub fn with_look_handler(
        outfits: Arc<dyn OutfitRepository>,
        moodboards: Arc<dyn MoodboardRepository>,
        weather: Arc<ResolveWeatherHandler>,
        look_handler: LookOfTheDayHandler,
    ) -> Self {
        let closet = ClosetHandlers::new(
            Arc::new(CreateOutfitHandler::new(outfits.clone())),
            Arc::new(UpdateOutfitHandler::new(outfits.clone())),
            Arc::new(MarkWornHandler::new(outfits.clone())),
            Arc::new(DeleteOutfitHandler::new(outfits.clone())),
            Arc::new(GetOutfitHandler::new(outfits.clone())),
            Arc::new(SearchClosetHandler::new(outfits.clone())),
            Arc::new(GetClosetStatsHandler::new(outfits.clone())),
        );

        let calendar = CalendarHandlers::new(
            Arc::new(PlanOutfitHandler::new(outfits.clone())),
            Arc::new(UpdatePlanningHandler::new(outfits.clone())),
            Arc::new(DeletePlanningHandler::new(outfits.clone())),
            Arc::new(GetCalendarHandler::new(outfits.clone())),
        );

        let moodboard = MoodboardHandlers::new(
            Arc::new(CreateMoodboardHandler::new(moodboards.clone())),
            Arc::new(GetMoodboardsHandler::new(moodboards.clone())),
            Arc::new(UpdateMoodboardHandler::new(moodboards.clone())),
            Arc::new(DeleteMoodboardHandler::new(moodboards.clone())),
            Arc::new(PlaceItemHandler::new(moodboards.clone())),
            Arc::new(ArrangeItemHandler::new(moodboards.clone())),
            Arc::new(AddDecorationHandler::new(moodboards.clone())),
            Arc::new(RemoveElementHandler::new(moodboards)),
        );

        let today = TodayHandlers::new(Arc::new(TodayView::new(Arc::new(look_handler))), weather);

        Self {
            closet,
            calendar,
            moodboard,
            today,
            persona: PersonaHandlers::new(Arc::new(ClassifyPersonaHandler::new())),
            lookbook: LookbookHandlers::new(Arc::new(GetLookbookHandler::new(outfits))),
        }
    }
}
