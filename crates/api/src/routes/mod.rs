pub mod health;
pub mod order;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /orders                      list, create
/// /orders/{id}                 get, update, delete
/// /orders/{id}/status          update status (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/orders", order::router())
}
