//! HTTP handlers for moodboard endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{parse_path, ErrorResponse};
use crate::application::handlers::moodboard::{
    AddDecorationCommand, AddDecorationHandler, ArrangeItemCommand, ArrangeItemHandler,
    CanvasEditResult, CreateMoodboardCommand, CreateMoodboardHandler, DeleteMoodboardCommand,
    DeleteMoodboardHandler, GetMoodboardsHandler, PlaceItemCommand, PlaceItemHandler,
    RemoveElementCommand, RemoveElementHandler, UpdateMoodboardCommand, UpdateMoodboardHandler,
};
use crate::domain::foundation::{ElementId, MoodboardId};
use crate::domain::moodboard::MoodboardError;

use super::dto::{
    AddDecorationRequest, ArrangeItemRequest, CanvasEditResponse, CreateMoodboardRequest,
    MoodboardListResponse, MoodboardResponse, PlaceItemRequest, UpdateMoodboardRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct MoodboardHandlers {
    create_handler: Arc<CreateMoodboardHandler>,
    get_handler: Arc<GetMoodboardsHandler>,
    update_handler: Arc<UpdateMoodboardHandler>,
    delete_handler: Arc<DeleteMoodboardHandler>,
    place_item_handler: Arc<PlaceItemHandler>,
    arrange_item_handler: Arc<ArrangeItemHandler>,
    add_decoration_handler: Arc<AddDecorationHandler>,
    remove_element_handler: Arc<RemoveElementHandler>,
}

impl MoodboardHandlers {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_handler: Arc<CreateMoodboardHandler>,
        get_handler: Arc<GetMoodboardsHandler>,
        update_handler: Arc<UpdateMoodboardHandler>,
        delete_handler: Arc<DeleteMoodboardHandler>,
        place_item_handler: Arc<PlaceItemHandler>,
        arrange_item_handler: Arc<ArrangeItemHandler>,
        add_decoration_handler: Arc<AddDecorationHandler>,
        remove_element_handler: Arc<RemoveElementHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            update_handler,
            delete_handler,
            place_item_handler,
            arrange_item_handler,
            add_decoration_handler,
            remove_element_handler,
        }
    }
}

fn parse_board_and_element(
    moodboard_id: &str,
    element_id: &str,
) -> Result<(MoodboardId, ElementId), Response> {
    Ok((
        parse_path(moodboard_id, "moodboard ID")?,
        parse_path(element_id, "element ID")?,
    ))
}

fn canvas_edit_created(result: CanvasEditResult) -> Response {
    let response = CanvasEditResponse {
        element_id: result.element_id.value(),
        moodboard: result.moodboard.into(),
    };
    (StatusCode::CREATED, Json(response)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/moodboards - All boards
pub async fn list_moodboards(State(handlers): State<MoodboardHandlers>) -> Response {
    match handlers.get_handler.list().await {
        Ok(boards) => (StatusCode::OK, Json(MoodboardListResponse::from(boards))).into_response(),
        Err(e) => handle_moodboard_error(e),
    }
}

/// POST /api/moodboards - New empty board
pub async fn create_moodboard(
    State(handlers): State<MoodboardHandlers>,
    body: Option<Json<CreateMoodboardRequest>>,
) -> Response {
    let data = body.map(|Json(req)| req).unwrap_or_default().into();

    match handlers
        .create_handler
        .handle(CreateMoodboardCommand { data })
        .await
    {
        Ok(board) => (StatusCode::CREATED, Json(MoodboardResponse::from(board))).into_response(),
        Err(e) => handle_moodboard_error(e),
    }
}

/// GET /api/moodboards/:id - One board
pub async fn get_moodboard(
    State(handlers): State<MoodboardHandlers>,
    Path(moodboard_id): Path<String>,
) -> Response {
    let moodboard_id = match parse_path::<MoodboardId>(&moodboard_id, "moodboard ID") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.get(moodboard_id).await {
        Ok(board) => (StatusCode::OK, Json(MoodboardResponse::from(board))).into_response(),
        Err(e) => handle_moodboard_error(e),
    }
}

/// PATCH /api/moodboards/:id - Rename or replace the canvas
pub async fn update_moodboard(
    State(handlers): State<MoodboardHandlers>,
    Path(moodboard_id): Path<String>,
    Json(req): Json<UpdateMoodboardRequest>,
) -> Response {
    let moodboard_id = match parse_path::<MoodboardId>(&moodboard_id, "moodboard ID") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = UpdateMoodboardCommand {
        moodboard_id,
        patch: req.into(),
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(board) => (StatusCode::OK, Json(MoodboardResponse::from(board))).into_response(),
        Err(e) => handle_moodboard_error(e),
    }
}

/// DELETE /api/moodboards/:id - Remove a board
pub async fn delete_moodboard(
    State(handlers): State<MoodboardHandlers>,
    Path(moodboard_id): Path<String>,
) -> Response {
    let moodboard_id = match parse_path::<MoodboardId>(&moodboard_id, "moodboard ID") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .delete_handler
        .handle(DeleteMoodboardCommand { moodboard_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_moodboard_error(e),
    }
}

/// POST /api/moodboards/:id/items - Drop an outfit onto the canvas
pub async fn place_item(
    State(handlers): State<MoodboardHandlers>,
    Path(moodboard_id): Path<String>,
    Json(req): Json<PlaceItemRequest>,
) -> Response {
    let moodboard_id = match parse_path::<MoodboardId>(&moodboard_id, "moodboard ID") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = PlaceItemCommand {
        moodboard_id,
        placement: req.into(),
    };

    match handlers.place_item_handler.handle(cmd).await {
        Ok(result) => canvas_edit_created(result),
        Err(e) => handle_moodboard_error(e),
    }
}

/// PATCH /api/moodboards/:id/items/:element_id - Move and/or resize an item
pub async fn arrange_item(
    State(handlers): State<MoodboardHandlers>,
    Path((moodboard_id, element_id)): Path<(String, String)>,
    Json(req): Json<ArrangeItemRequest>,
) -> Response {
    let (moodboard_id, element_id) = match parse_board_and_element(&moodboard_id, &element_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let cmd = ArrangeItemCommand {
        moodboard_id,
        element_id,
        position: req.position(),
        size: req.size(),
    };

    match handlers.arrange_item_handler.handle(cmd).await {
        Ok(board) => (StatusCode::OK, Json(MoodboardResponse::from(board))).into_response(),
        Err(e) => handle_moodboard_error(e),
    }
}

/// POST /api/moodboards/:id/decorations - Add a sticker
pub async fn add_decoration(
    State(handlers): State<MoodboardHandlers>,
    Path(moodboard_id): Path<String>,
    Json(req): Json<AddDecorationRequest>,
) -> Response {
    let moodboard_id = match parse_path::<MoodboardId>(&moodboard_id, "moodboard ID") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = AddDecorationCommand {
        moodboard_id,
        placement: req.into(),
    };

    match handlers.add_decoration_handler.handle(cmd).await {
        Ok(result) => canvas_edit_created(result),
        Err(e) => handle_moodboard_error(e),
    }
}

/// DELETE /api/moodboards/:id/elements/:element_id - Remove an item or decoration
pub async fn remove_element(
    State(handlers): State<MoodboardHandlers>,
    Path((moodboard_id, element_id)): Path<(String, String)>,
) -> Response {
    let (moodboard_id, element_id) = match parse_board_and_element(&moodboard_id, &element_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let cmd = RemoveElementCommand {
        moodboard_id,
        element_id,
    };

    match handlers.remove_element_handler.handle(cmd).await {
        Ok(board) => (StatusCode::OK, Json(MoodboardResponse::from(board))).into_response(),
        Err(e) => handle_moodboard_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_moodboard_error(error: MoodboardError) -> Response {
    let code = error.code();
    let message = error.message();
    match error {
        MoodboardError::NotFound(_) | MoodboardError::ElementNotFound { .. } => {
            ErrorResponse::new(code, message).into_response_with(StatusCode::NOT_FOUND)
        }
        MoodboardError::ValidationFailed { field, .. } => {
            ErrorResponse::validation(&field, message).into_response_with(StatusCode::BAD_REQUEST)
        }
        MoodboardError::Store(cause) => {
            tracing::error!(error = %cause, "moodboard store failure");
            ErrorResponse::store(message).into_response_with(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
