//! Route definitions for the `/orders` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::order;
use crate::state::AppState;

/// Routes mounted at `/orders`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// PATCH  /{id}/status     -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(order::list).post(order::create))
        .route(
            "/{id}",
            get(order::get_by_id)
                .put(order::update)
                .delete(order::delete),
        )
        .route("/{id}/status", patch(order::update_status))
}
