//! Handlers for the `/early-access` resource.

use axum::extract::{Path, State};
use axum::Json;
use ctrl_db::models::early_access::{EarlyAccessRequest, EarlyAccessSubmission};
use ctrl_db::repositories::EarlyAccessRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::handlers::parse_path_id;
use crate::response::{CreatedResponse, SuccessResponse};
use crate::state::AppState;

const MISSING_ID: &str = "Request ID is required";

/// POST /api/early-access
pub async fn create(
    State(state): State<AppState>,
    AppJson(submission): AppJson<EarlyAccessSubmission>,
) -> AppResult<Json<CreatedResponse>> {
    let input = submission.validate()?;
    let request = EarlyAccessRepo::create(&state.pool, &input).await?;

    tracing::info!(early_access_id = request.id, role = %request.role, "Early access requested");

    Ok(Json(CreatedResponse {
        success: true,
        id: request.id,
        message: None,
    }))
}

/// GET /api/early-access
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<EarlyAccessRequest>>> {
    let requests = EarlyAccessRepo::list_all(&state.pool).await?;
    Ok(Json(requests))
}

/// DELETE /api/early-access/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    let id = parse_path_id(&raw_id, MISSING_ID)?;

    if EarlyAccessRepo::delete(&state.pool, id).await? {
        tracing::info!(early_access_id = id, "Early access request deleted");
    } else {
        tracing::debug!(early_access_id = id, "Delete found no early access request");
    }

    Ok(Json(SuccessResponse::ok()))
}
