use chrono::Utc;
use colored::Colorize;

use crate::backend::Product;
use crate::features::sale::SubmitOutcome;
use crate::features::sync::{QueueRecord, QueueStats, QueueStatus, SyncReport};

/// Format a product as pretty output
pub fn format_product_pretty(product: &Product) -> String {
    format!(
        "{}  {}\n  SKU:   {}\n  Price: {:.2}",
        product.name.bold(),
        "found".green(),
        product.sku,
        product.price
    )
}

/// Format a submission outcome, including the receipt text when posted
pub fn format_submit_outcome_pretty(outcome: &SubmitOutcome) -> String {
    match outcome {
        SubmitOutcome::Posted { payload, receipt } => format!(
            "{} Sale {} posted (total {:.2})\n\n{}",
            "✓".green(),
            payload.client_txn_id().bold(),
            payload.total(),
            receipt.receipt_text
        ),
        SubmitOutcome::Queued { record, reason } => format!(
            "{} {}\n  Sale {} queued for later (queue id {}, total {:.2})\n  {}",
            "⏳".yellow(),
            reason.to_string().yellow(),
            record.client_txn_id.bold(),
            record.id,
            record.payload.total(),
            "Run 'pos-client sync' once the backend is reachable".dimmed()
        ),
    }
}

/// Format a sweep report
pub fn format_sync_report_pretty(report: &SyncReport) -> String {
    if report.attempted == 0 {
        return "No pending sales to sync.".to_string();
    }

    let mut lines = vec![
        format!("Sync finished: {} queued sales", report.attempted),
        "─".repeat(40),
        format!(
            "  {} {}",
            "✓".green(),
            format!("{} synced", report.synced).green()
        ),
    ];

    if report.still_pending() > 0 {
        lines.push(format!(
            "  {} {}",
            "⏳".yellow(),
            format!("{} still pending", report.still_pending()).yellow()
        ));
    }

    lines.join("\n")
}

/// Format queued sales as a table
pub fn format_records_pretty(records: &[QueueRecord], title: &str) -> String {
    if records.is_empty() {
        return format!("{title} (0 sales)\n  No sales");
    }

    let mut lines = vec![
        format!("{title} ({} sales)", records.len()),
        "─".repeat(72),
        format!(
            "{:<6} {:<28} {:>10} {:<17} {}",
            "ID", "Transaction", "Total", "Created", "Status"
        ),
        "─".repeat(72),
    ];

    for record in records {
        let status = match record.status {
            QueueStatus::Pending => "pending".yellow(),
            QueueStatus::Synced => "synced".green(),
        };
        lines.push(format!(
            "{:<6} {:<28} {:>10.2} {:<17} {}",
            record.id,
            record.client_txn_id,
            record.payload.total(),
            record.created_at.format("%Y-%m-%d %H:%M").to_string(),
            status
        ));
    }

    lines.join("\n")
}

/// Format queue statistics
pub fn format_queue_stats_pretty(stats: &QueueStats) -> String {
    let mut lines = vec![
        "Sales Queue Status".bold().to_string(),
        "─".repeat(40),
        format!(
            "  Pending:  {} {}",
            stats.pending,
            if stats.pending > 0 {
                "sales waiting".yellow()
            } else {
                "".normal()
            }
        ),
        format!("  Synced:   {} {}", stats.synced, "sales".dimmed()),
    ];

    if let Some(oldest) = stats.oldest_pending {
        let age = Utc::now().signed_duration_since(oldest);
        let age_str = if age.num_hours() > 0 {
            format!("{} hours ago", age.num_hours())
        } else if age.num_minutes() > 0 {
            format!("{} minutes ago", age.num_minutes())
        } else {
            "just now".to_string()
        };
        lines.push(format!("  Oldest:   {}", age_str.dimmed()));
    }

    if stats.pending > 0 {
        lines.push(String::new());
        lines.push(
            "Run 'pos-client sync' to deliver pending sales"
                .dimmed()
                .to_string(),
        );
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{DeliveryFailure, SaleReceipt};
    use crate::features::sale::{LineItem, SalePayload};

    fn payload() -> SalePayload {
        SalePayload::new(
            "S1-20240101120000".to_string(),
            "S1".to_string(),
            vec![LineItem::new("A", 2, 5.0)],
            "paid".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_posted_shows_receipt_text_verbatim() {
        colored::control::set_override(false);
        let outcome = SubmitOutcome::Posted {
            payload: payload(),
            receipt: SaleReceipt {
                receipt_text: "RICE SHOP\nA x2   10.00\nTOTAL 10.00".to_string(),
                extra: serde_json::Map::new(),
            },
        };

        let output = format_submit_outcome_pretty(&outcome);
        assert!(output.contains("S1-20240101120000"));
        assert!(output.ends_with("RICE SHOP\nA x2   10.00\nTOTAL 10.00"));
    }

    #[test]
    fn test_queued_mentions_reason_and_id() {
        colored::control::set_override(false);
        let outcome = SubmitOutcome::Queued {
            record: QueueRecord {
                id: 7,
                client_txn_id: "S1-20240101120000".to_string(),
                payload: payload(),
                status: QueueStatus::Pending,
                created_at: Utc::now(),
            },
            reason: DeliveryFailure::Timeout,
        };

        let output = format_submit_outcome_pretty(&outcome);
        assert!(output.contains("backend timed out"));
        assert!(output.contains("queue id 7"));
    }

    #[test]
    fn test_sync_report_empty() {
        assert_eq!(
            format_sync_report_pretty(&SyncReport::default()),
            "No pending sales to sync."
        );
    }

    #[test]
    fn test_records_empty() {
        assert_eq!(
            format_records_pretty(&[], "Pending"),
            "Pending (0 sales)\n  No sales"
        );
    }
}
