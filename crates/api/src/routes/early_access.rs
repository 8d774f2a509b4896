use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::early_access;
use crate::state::AppState;

/// Early-access routes, nested under `/early-access`.
///
/// ```text
/// POST   /         create
/// GET    /         list
/// DELETE /{id}     delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(early_access::list).post(early_access::create))
        .route("/{id}", delete(early_access::delete))
}
