//! Handlers for the `/orders` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use orderdesk_core::error::CoreError;
use orderdesk_core::types::DbId;
use orderdesk_db::models::order::{CreateOrder, Order, UpdateOrder, UpdateOrderStatus};
use orderdesk_db::repositories::OrderRepo;
use orderdesk_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::ApiResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Order", id })
}

/// Load an order or fail with 404. Existence is checked before the body is
/// validated, so an unknown id wins over an invalid payload.
async fn ensure_exists(pool: &DbPool, id: DbId) -> AppResult<Order> {
    OrderRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// GET /api/orders
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Order>>>> {
    let orders = OrderRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::data(orders)))
}

/// GET /api/orders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = ensure_exists(&state.pool, id).await?;
    Ok(Json(ApiResponse::data(order)))
}

/// POST /api/orders
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateOrder>,
) -> AppResult<(StatusCode, Json<ApiResponse<Order>>)> {
    let new_order = input.validate()?;
    let order = OrderRepo::create(&state.pool, &new_order).await?;

    tracing::info!(order_id = order.id, service = %order.service, "Order created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(order, "Order created successfully")),
    ))
}

/// PUT /api/orders/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateOrder>,
) -> AppResult<Json<ApiResponse<Order>>> {
    ensure_exists(&state.pool, id).await?;
    let changes = input.validate()?;

    let order = OrderRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(order_id = id, status = %order.status, "Order updated");
    Ok(Json(ApiResponse::with_message(
        order,
        "Order updated successfully",
    )))
}

/// PATCH /api/orders/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateOrderStatus>,
) -> AppResult<Json<ApiResponse<Order>>> {
    ensure_exists(&state.pool, id).await?;
    let status = input.validate()?;

    let order = OrderRepo::set_status(&state.pool, id, status)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(order_id = id, %status, "Order status changed");
    Ok(Json(ApiResponse::with_message(
        order,
        "Status updated successfully",
    )))
}

/// DELETE /api/orders/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse>> {
    let deleted = OrderRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(order_id = id, "Order deleted");
        Ok(Json(ApiResponse::message("Order deleted successfully")))
    } else {
        Err(not_found(id))
    }
}
