pub mod early_access;
pub mod health;
pub mod reviews;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /reviews                       submit (POST), list approved (GET)
/// /reviews/admin                 list all states (GET)
/// /reviews/{id}                  delete (DELETE)
/// /reviews/{id}/approve          approve (PUT)
///
/// /early-access                  submit (POST), list (GET)
/// /early-access/{id}             delete (DELETE)
/// ```
///
/// The admin routes carry no access control.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/reviews", reviews::router())
        .nest("/early-access", early_access::router())
}
