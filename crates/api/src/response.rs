//! Shared response envelope for API handlers.
//!
//! Every response, success or failure, is wrapped as
//! `{ "success": bool, "message"?: string, "data"?: T }`.

use serde::Serialize;

/// Standard response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ApiResponse::with_message(order, "Order created successfully")))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize = ()> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful response carrying only a payload.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Successful response carrying a payload and a confirmation message.
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Successful response with a message and no payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Failure envelope.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}
