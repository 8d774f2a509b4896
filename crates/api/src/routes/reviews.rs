use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

/// Review routes, nested under `/reviews`.
///
/// ```text
/// POST   /                 create
/// GET    /                 list_public
/// GET    /admin            list_all
/// DELETE /{id}             delete
/// PUT    /{id}/approve     approve
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reviews::list_public).post(reviews::create))
        .route("/admin", get(reviews::list_all))
        .route("/{id}", delete(reviews::delete))
        .route("/{id}/approve", put(reviews::approve))
}
