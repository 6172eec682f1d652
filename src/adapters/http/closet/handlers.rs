//! HTTP handlers for closet endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{parse_path, ErrorResponse};
use crate::application::handlers::closet::{
    CreateOutfitCommand, CreateOutfitHandler, DeleteOutfitCommand, DeleteOutfitHandler,
    GetClosetStatsHandler, GetOutfitHandler, GetOutfitQuery, MarkWornCommand, MarkWornHandler,
    SearchClosetHandler, SearchClosetQuery, UpdateOutfitCommand, UpdateOutfitHandler,
};
use crate::domain::foundation::{OutfitId, Timestamp};
use crate::domain::outfit::{ClosetFilter, OutfitError};

use super::dto::{
    ClosetStatsResponse, CreateOutfitRequest, MarkWornRequest, OutfitListResponse,
    OutfitResponse, SearchParams, UpdateOutfitRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ClosetHandlers {
    create_handler: Arc<CreateOutfitHandler>,
    update_handler: Arc<UpdateOutfitHandler>,
    mark_worn_handler: Arc<MarkWornHandler>,
    delete_handler: Arc<DeleteOutfitHandler>,
    get_handler: Arc<GetOutfitHandler>,
    search_handler: Arc<SearchClosetHandler>,
    stats_handler: Arc<GetClosetStatsHandler>,
}

impl ClosetHandlers {
    pub fn new(
        create_handler: Arc<CreateOutfitHandler>,
        update_handler: Arc<UpdateOutfitHandler>,
        mark_worn_handler: Arc<MarkWornHandler>,
        delete_handler: Arc<DeleteOutfitHandler>,
        get_handler: Arc<GetOutfitHandler>,
        search_handler: Arc<SearchClosetHandler>,
        stats_handler: Arc<GetClosetStatsHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            mark_worn_handler,
            delete_handler,
            get_handler,
            search_handler,
            stats_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/outfits - Whole closet, oldest first
pub async fn list_outfits(State(handlers): State<ClosetHandlers>) -> Response {
    let query = SearchClosetQuery {
        filter: ClosetFilter::new(),
    };

    match handlers.search_handler.handle(query).await {
        Ok(outfits) => (StatusCode::OK, Json(OutfitListResponse::from(outfits))).into_response(),
        Err(e) => handle_outfit_error(e),
    }
}

/// GET /api/outfits/search - Free-text query plus tag selection
pub async fn search_outfits(
    State(handlers): State<ClosetHandlers>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = SearchClosetQuery {
        filter: params.into_filter(),
    };

    match handlers.search_handler.handle(query).await {
        Ok(outfits) => (StatusCode::OK, Json(OutfitListResponse::from(outfits))).into_response(),
        Err(e) => handle_outfit_error(e),
    }
}

/// GET /api/outfits/stats - Closet counters
pub async fn closet_stats(State(handlers): State<ClosetHandlers>) -> Response {
    match handlers.stats_handler.handle().await {
        Ok(stats) => (StatusCode::OK, Json(ClosetStatsResponse::from(stats))).into_response(),
        Err(e) => handle_outfit_error(e),
    }
}

/// POST /api/outfits - Upload an outfit
pub async fn create_outfit(
    State(handlers): State<ClosetHandlers>,
    Json(req): Json<CreateOutfitRequest>,
) -> Response {
    let data = match req.into_new_outfit() {
        Ok(data) => data,
        Err(e) => return handle_outfit_error(e.into()),
    };

    match handlers.create_handler.handle(CreateOutfitCommand { data }).await {
        Ok(outfit) => (StatusCode::CREATED, Json(OutfitResponse::from(outfit))).into_response(),
        Err(e) => handle_outfit_error(e),
    }
}

/// GET /api/outfits/:id - Single outfit
pub async fn get_outfit(
    State(handlers): State<ClosetHandlers>,
    Path(outfit_id): Path<String>,
) -> Response {
    let outfit_id = match parse_path::<OutfitId>(&outfit_id, "outfit ID") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetOutfitQuery { outfit_id }).await {
        Ok(outfit) => (StatusCode::OK, Json(OutfitResponse::from(outfit))).into_response(),
        Err(e) => handle_outfit_error(e),
    }
}

/// PATCH /api/outfits/:id - Partial update
pub async fn update_outfit(
    State(handlers): State<ClosetHandlers>,
    Path(outfit_id): Path<String>,
    Json(req): Json<UpdateOutfitRequest>,
) -> Response {
    let outfit_id = match parse_path::<OutfitId>(&outfit_id, "outfit ID") {
        Ok(id) => id,
        Err(response) => return response,
    };
    let patch = match req.into_patch() {
        Ok(patch) => patch,
        Err(e) => return handle_outfit_error(e.into()),
    };

    match handlers
        .update_handler
        .handle(UpdateOutfitCommand { outfit_id, patch })
        .await
    {
        Ok(outfit) => (StatusCode::OK, Json(OutfitResponse::from(outfit))).into_response(),
        Err(e) => handle_outfit_error(e),
    }
}

/// POST /api/outfits/:id/worn - Record a wear, now unless a time is given
pub async fn mark_worn(
    State(handlers): State<ClosetHandlers>,
    Path(outfit_id): Path<String>,
    body: Option<Json<MarkWornRequest>>,
) -> Response {
    let outfit_id = match parse_path::<OutfitId>(&outfit_id, "outfit ID") {
        Ok(id) => id,
        Err(response) => return response,
    };
    let worn_at = body
        .and_then(|Json(req)| req.worn_at)
        .map(Timestamp::from_datetime);

    match handlers
        .mark_worn_handler
        .handle(MarkWornCommand { outfit_id, worn_at })
        .await
    {
        Ok(outfit) => (StatusCode::OK, Json(OutfitResponse::from(outfit))).into_response(),
        Err(e) => handle_outfit_error(e),
    }
}

/// DELETE /api/outfits/:id - Remove an outfit
pub async fn delete_outfit(
    State(handlers): State<ClosetHandlers>,
    Path(outfit_id): Path<String>,
) -> Response {
    let outfit_id = match parse_path::<OutfitId>(&outfit_id, "outfit ID") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .delete_handler
        .handle(DeleteOutfitCommand { outfit_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_outfit_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Maps closet and calendar failures onto status codes.
pub(crate) fn handle_outfit_error(error: OutfitError) -> Response {
    let code = error.code();
    let message = error.message();
    match error {
        OutfitError::NotFound(_) | OutfitError::PlanningNotFound { .. } => {
            ErrorResponse::new(code, message).into_response_with(StatusCode::NOT_FOUND)
        }
        OutfitError::ValidationFailed { field, .. } => {
            ErrorResponse::validation(&field, message).into_response_with(StatusCode::BAD_REQUEST)
        }
        OutfitError::Store(cause) => {
            tracing::error!(error = %cause, "closet store failure");
            ErrorResponse::store(message).into_response_with(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
