//! Queue record types.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::features::sale::SalePayload;

/// Lifecycle status of a queued sale.
///
/// The only transition is `Pending` → `Synced`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueStatus {
    /// Not yet accepted by the backend.
    Pending,
    /// Accepted by the backend during a sweep.
    Synced,
}

impl QueueStatus {
    /// Value stored in the `status` column.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Synced => "synced",
        }
    }
}

impl std::fmt::Display for QueueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueueStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "synced" => Ok(Self::Synced),
            other => Err(format!("unknown queue status '{other}'")),
        }
    }
}

/// A sale stored in the offline queue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueueRecord {
    /// Surrogate key assigned by the store.
    pub id: i64,
    pub client_txn_id: String,
    pub payload: SalePayload,
    pub status: QueueStatus,
    pub created_at: DateTime<Utc>,
}
