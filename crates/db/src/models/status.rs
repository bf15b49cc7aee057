//! Order lifecycle status.
//!
//! Stored as lowercase TEXT; the `orders.status` CHECK constraint mirrors
//! [`orderdesk_core::order::VALID_STATUSES`].

use std::fmt;
use std::str::FromStr;

use orderdesk_core::error::CoreError;
use orderdesk_core::order::{
    self, STATUS_CANCELLED, STATUS_COMPLETED, STATUS_PENDING, STATUS_PROCESSING,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => STATUS_PENDING,
            Self::Processing => STATUS_PROCESSING,
            Self::Completed => STATUS_COMPLETED,
            Self::Cancelled => STATUS_CANCELLED,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        order::validate_status(s)?;
        match s {
            STATUS_PENDING => Ok(Self::Pending),
            STATUS_PROCESSING => Ok(Self::Processing),
            STATUS_COMPLETED => Ok(Self::Completed),
            _ => Ok(Self::Cancelled),
        }
    }
}
