//! Handlers for the `/reviews` resource: intake and moderation.
//!
//! The public surface only ever sees approved reviews. The admin surface
//! lists everything and drives the pending → approved transition.

use axum::extract::{Path, State};
use axum::Json;
use ctrl_core::review::REVIEW_SUBMITTED_MESSAGE;
use ctrl_db::models::review::{Review, ReviewSubmission};
use ctrl_db::repositories::ReviewRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::handlers::parse_path_id;
use crate::response::{CreatedResponse, SuccessResponse};
use crate::state::AppState;

const MISSING_ID: &str = "Review ID is required";

/// POST /api/reviews
///
/// Validate a submission and store it as pending.
pub async fn create(
    State(state): State<AppState>,
    AppJson(submission): AppJson<ReviewSubmission>,
) -> AppResult<Json<CreatedResponse>> {
    let input = submission.validate()?;
    let review = ReviewRepo::create(&state.pool, &input).await?;

    tracing::info!(review_id = review.id, rating = review.rating, "Review submitted");

    Ok(Json(CreatedResponse {
        success: true,
        id: review.id,
        message: Some(REVIEW_SUBMITTED_MESSAGE),
    }))
}

/// GET /api/reviews
///
/// Approved reviews only, newest first.
pub async fn list_public(State(state): State<AppState>) -> AppResult<Json<Vec<Review>>> {
    let reviews = ReviewRepo::list_approved(&state.pool).await?;
    debug_assert!(reviews.iter().all(|r| r.status().is_public()));
    Ok(Json(reviews))
}

/// GET /api/reviews/admin
///
/// Every review in both states, newest first.
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Review>>> {
    let reviews = ReviewRepo::list_all(&state.pool).await?;
    Ok(Json(reviews))
}

/// PUT /api/reviews/{id}/approve
///
/// Idempotent: succeeds for already-approved and unknown ids.
pub async fn approve(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    let id = parse_path_id(&raw_id, MISSING_ID)?;

    if ReviewRepo::approve(&state.pool, id).await? {
        tracing::info!(review_id = id, "Review approved");
    } else {
        tracing::debug!(review_id = id, "Approve was a no-op");
    }

    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /api/reviews/{id}
///
/// Idempotent: deleting an unknown id succeeds.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    let id = parse_path_id(&raw_id, MISSING_ID)?;

    if ReviewRepo::delete(&state.pool, id).await? {
        tracing::info!(review_id = id, "Review deleted");
    } else {
        tracing::debug!(review_id = id, "Delete found no review");
    }

    Ok(Json(SuccessResponse::ok()))
}
