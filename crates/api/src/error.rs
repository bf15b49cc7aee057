use std::any::Any;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use orderdesk_core::error::CoreError;

use crate::response::ApiResponse;

/// Message for unknown routes and unparseable path segments.
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Resource not found";

/// Message for handler panics.
pub const PANIC_MESSAGE: &str = "Internal server error";

/// Sanitized message for every other 500.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{ "success": false, "message" }`
/// envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `orderdesk_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body was not valid JSON for the endpoint.
    #[error("Malformed JSON body: {0}")]
    JsonBody(#[from] JsonRejection),

    /// A path segment could not be parsed (e.g. a non-numeric id).
    #[error("Invalid path parameter: {0}")]
    PathParam(#[from] PathRejection),

    /// No route matched the request.
    #[error("No route matches the request")]
    RouteNotFound,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => {
                    (StatusCode::NOT_FOUND, format!("{entity} not found"))
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::JsonBody(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            AppError::PathParam(_) | AppError::RouteNotFound => {
                (StatusCode::NOT_FOUND, ROUTE_NOT_FOUND_MESSAGE.to_string())
            }
        };

        (status, Json(ApiResponse::failure(message))).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, ROUTE_NOT_FOUND_MESSAGE.to_string()),
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
        }
    }
}

/// Fallback handler for requests that match no route.
pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

/// Render a handler panic as a 500 envelope. Used with
/// `CatchPanicLayer::custom`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(panic = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::failure(PANIC_MESSAGE)),
    )
        .into_response()
}
