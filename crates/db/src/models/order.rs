//! Order entity model and DTOs.
//!
//! Rust field names are English; serde renames keep the wire format
//! (`nama`, `telepon`, `layanan`, `deskripsi`) that clients submit.

use orderdesk_core::error::CoreError;
use orderdesk_core::order::{
    invalid_status, require_field, FIELD_BUDGET, FIELD_DESCRIPTION, FIELD_EMAIL, FIELD_NAME, FIELD_PHONE,
    FIELD_SERVICE,
};
use orderdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::models::status::OrderStatus;

/// An order row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    #[serde(rename = "nama")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telepon")]
    pub phone: String,
    #[serde(rename = "layanan")]
    pub service: String,
    #[serde(rename = "deskripsi")]
    pub description: String,
    pub budget: String,
    pub status: OrderStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for a customer submission.
///
/// Every field is optional at the decode step so a missing field surfaces
/// as a validation error naming it, not as a JSON rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateOrder {
    #[serde(rename = "nama")]
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "telepon")]
    pub phone: Option<String>,
    #[serde(rename = "layanan")]
    pub service: Option<String>,
    #[serde(rename = "deskripsi")]
    pub description: Option<String>,
    pub budget: Option<String>,
}

/// A submission that passed validation. Status and timestamps are assigned
/// by the repository.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub description: String,
    pub budget: String,
}

impl CreateOrder {
    /// Check required fields in submission order. The first missing or
    /// empty field is reported.
    pub fn validate(&self) -> Result<NewOrder, CoreError> {
        Ok(NewOrder {
            name: require_field(FIELD_NAME, self.name.as_deref())?,
            email: require_field(FIELD_EMAIL, self.email.as_deref())?,
            phone: require_field(FIELD_PHONE, self.phone.as_deref())?,
            service: require_field(FIELD_SERVICE, self.service.as_deref())?,
            description: require_field(FIELD_DESCRIPTION, self.description.as_deref())?,
            budget: require_field(FIELD_BUDGET, self.budget.as_deref())?,
        })
    }
}

/// DTO for updating an existing order. All fields are optional; absent
/// (or `null`) text fields keep their stored value, supplied ones are
/// written as-is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOrder {
    #[serde(rename = "nama")]
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "telepon")]
    pub phone: Option<String>,
    #[serde(rename = "layanan")]
    pub service: Option<String>,
    #[serde(rename = "deskripsi")]
    pub description: Option<String>,
    pub budget: Option<String>,
    /// Raw status value, parsed during [`UpdateOrder::validate`]. A key
    /// that is present but `null` is `Some(Value::Null)`, not `None`.
    #[serde(default, deserialize_with = "present")]
    pub status: Option<Value>,
}

/// A validated partial update.
#[derive(Debug, Clone, Default)]
pub struct OrderChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub description: Option<String>,
    pub budget: Option<String>,
    pub status: Option<OrderStatus>,
}

impl UpdateOrder {
    /// Validate the supplied status. Text fields carry no rule beyond being
    /// strings, so they pass through unchanged.
    pub fn validate(&self) -> Result<OrderChanges, CoreError> {
        let status = self.status.as_ref().map(parse_status).transpose()?;

        Ok(OrderChanges {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            service: self.service.clone(),
            description: self.description.clone(),
            budget: self.budget.clone(),
            status,
        })
    }
}

/// Body of `PATCH /orders/{id}/status`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOrderStatus {
    #[serde(default, deserialize_with = "present")]
    pub status: Option<Value>,
}

impl UpdateOrderStatus {
    /// A missing status is treated the same as an unknown one.
    pub fn validate(&self) -> Result<OrderStatus, CoreError> {
        self.status
            .as_ref()
            .ok_or_else(invalid_status)
            .and_then(parse_status)
    }
}

/// Only a string naming a known status is accepted; `null`, numbers and
/// other JSON values are all an invalid status.
fn parse_status(value: &Value) -> Result<OrderStatus, CoreError> {
    match value {
        Value::String(s) => s.parse(),
        _ => Err(invalid_status()),
    }
}

/// Keep an explicit `null` distinct from a missing key.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
