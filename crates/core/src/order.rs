//! Order intake rules: status vocabulary and required submission fields.
//!
//! Field constants use the wire names clients send (`nama`, `telepon`, ...),
//! because validation messages echo them back verbatim.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_PROCESSING: &str = "processing";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_CANCELLED: &str = "cancelled";

/// All accepted status values, in lifecycle order.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_PROCESSING,
    STATUS_COMPLETED,
    STATUS_CANCELLED,
];

/// Message returned for any status outside [`VALID_STATUSES`].
pub const INVALID_STATUS_MESSAGE: &str = "Invalid status";

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

pub const FIELD_NAME: &str = "nama";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE: &str = "telepon";
pub const FIELD_SERVICE: &str = "layanan";
pub const FIELD_DESCRIPTION: &str = "deskripsi";
pub const FIELD_BUDGET: &str = "budget";

/// Fields a submission must carry, in the order they are checked.
pub const REQUIRED_FIELDS: &[&str] = &[
    FIELD_NAME,
    FIELD_EMAIL,
    FIELD_PHONE,
    FIELD_SERVICE,
    FIELD_DESCRIPTION,
    FIELD_BUDGET,
];

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// The error for any status outside [`VALID_STATUSES`], including a status
/// that is `null` or not a string at all.
pub fn invalid_status() -> CoreError {
    CoreError::Validation(INVALID_STATUS_MESSAGE.to_string())
}

/// Validate that `status` is one of [`VALID_STATUSES`].
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(invalid_status())
    }
}

/// Require a submission field to be present and non-empty, returning an
/// owned copy of the value.
pub fn require_field(field: &str, value: Option<&str>) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(CoreError::Validation(format!("Field {field} is required"))),
    }
}
