//! HTTP handler for the lookbook page.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::closet::handle_outfit_error;
use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::lookbook::{GetLookbookHandler, GetLookbookQuery};
use crate::domain::lookbook::LookbookFilter;

use super::dto::{LookbookParams, LookbookResponse};

#[derive(Clone)]
pub struct LookbookHandlers {
    lookbook_handler: Arc<GetLookbookHandler>,
}

impl LookbookHandlers {
    pub fn new(lookbook_handler: Arc<GetLookbookHandler>) -> Self {
        Self { lookbook_handler }
    }
}

/// GET /api/lookbook - Timeline grouped by day, with header stats
pub async fn get_lookbook(
    State(handlers): State<LookbookHandlers>,
    Query(params): Query<LookbookParams>,
) -> Response {
    let filter = match params.filter.as_deref() {
        None | Some("") => LookbookFilter::All,
        Some(raw) => match raw.parse::<LookbookFilter>() {
            Ok(filter) => filter,
            Err(e) => {
                return ErrorResponse::validation("filter", e.to_string())
                    .into_response_with(StatusCode::BAD_REQUEST)
            }
        },
    };

    let query = GetLookbookQuery {
        filter,
        today: None,
    };

    match handlers.lookbook_handler.handle(query).await {
        Ok(view) => (StatusCode::OK, Json(LookbookResponse::from(view))).into_response(),
        Err(e) => handle_outfit_error(e),
    }
}
