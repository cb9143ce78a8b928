//! JSON output formatting for pos-client.

use serde::Serialize;
use serde_json::json;

use crate::error::PosError;
use crate::features::sync::{QueueRecord, QueueStats, SyncReport};

/// Format queued sales as JSON.
///
/// # Errors
///
/// Returns `PosError::Parse` if JSON serialization fails.
pub fn format_records_json(records: &[QueueRecord], title: &str) -> Result<String, PosError> {
    let output = json!({
        "list": title,
        "count": records.len(),
        "items": records,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a sync report as JSON.
///
/// # Errors
///
/// Returns `PosError::Parse` if JSON serialization fails.
pub fn format_sync_report_json(report: &SyncReport) -> Result<String, PosError> {
    let output = json!({
        "attempted": report.attempted,
        "synced": report.synced,
        "still_pending": report.still_pending(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format queue statistics as JSON.
///
/// # Errors
///
/// Returns `PosError::Parse` if JSON serialization fails.
pub fn format_queue_stats_json(stats: &QueueStats) -> Result<String, PosError> {
    let output = json!({
        "pending": stats.pending,
        "synced": stats.synced,
        "oldest_pending": stats.oldest_pending.map(|t| t.to_rfc3339()),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Serialize any value as pretty JSON.
///
/// # Errors
///
/// Returns `PosError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PosError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::Value;

    use super::*;
    use crate::features::sale::{LineItem, SalePayload};
    use crate::features::sync::QueueStatus;

    fn make_record(id: i64, status: QueueStatus) -> QueueRecord {
        let payload = SalePayload::new(
            "S1-20240101120000".to_string(),
            "S1".to_string(),
            vec![LineItem::new("A", 2, 5.0)],
            "paid".to_string(),
        )
        .unwrap();
        QueueRecord {
            id,
            client_txn_id: payload.client_txn_id().to_string(),
            payload,
            status,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_format_records_json() {
        let records = vec![make_record(1, QueueStatus::Pending)];
        let json = format_records_json(&records, "pending").unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["status"], "pending");
        assert_eq!(value["items"][0]["payload"]["total"], 10.0);
    }

    #[test]
    fn test_format_sync_report_json() {
        let report = SyncReport {
            attempted: 3,
            synced: 2,
        };
        let value: Value = serde_json::from_str(&format_sync_report_json(&report).unwrap()).unwrap();

        assert_eq!(value["synced"], 2);
        assert_eq!(value["still_pending"], 1);
    }

    #[test]
    fn test_format_queue_stats_json_empty() {
        let stats = QueueStats {
            pending: 0,
            synced: 0,
            oldest_pending: None,
        };
        let value: Value = serde_json::from_str(&format_queue_stats_json(&stats).unwrap()).unwrap();

        assert_eq!(value["pending"], 0);
        assert!(value["oldest_pending"].is_null());
    }
}
