//! Nutrition history routes
//!
//! No authorization is enforced: any caller may write or read the history
//! for any email.

use super::extract::ApiJson;
use crate::error::ApiResult;
use crate::services::HistoryService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use nutrition_tracker_shared::{HistoryEntry, HistoryRecordResponse, MessageResponse};

/// Create history routes
pub fn history_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(save_history))
        .route("/:email", get(list_history))
}

/// POST /api/history - Save a history entry
async fn save_history(
    State(state): State<AppState>,
    ApiJson(entry): ApiJson<HistoryEntry>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    HistoryService::submit(state.history(), entry).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::new("History saved"))))
}

/// GET /api/history/:email - All records tagged with `email`
async fn list_history(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<Vec<HistoryRecordResponse>>> {
    let records = HistoryService::list(state.history(), &email).await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}
