//! Output formatting for pos-client.
//!
//! Every command renders either human-readable colored text or JSON.

mod json;
mod pretty;

use crate::backend::Product;
use crate::cli::args::OutputFormat;
use crate::error::PosError;
use crate::features::sale::SubmitOutcome;
use crate::features::sync::{QueueRecord, QueueStats, SyncReport};

pub use json::*;
pub use pretty::*;

/// Format a looked-up product.
///
/// # Errors
///
/// Returns `PosError::Parse` if JSON serialization fails.
pub fn format_product(product: &Product, format: OutputFormat) -> Result<String, PosError> {
    match format {
        OutputFormat::Pretty => Ok(format_product_pretty(product)),
        OutputFormat::Json => to_json(product),
    }
}

/// Format the result of a sale submission.
///
/// # Errors
///
/// Returns `PosError::Parse` if JSON serialization fails.
pub fn format_submit_outcome(
    outcome: &SubmitOutcome,
    format: OutputFormat,
) -> Result<String, PosError> {
    match format {
        OutputFormat::Pretty => Ok(format_submit_outcome_pretty(outcome)),
        OutputFormat::Json => to_json(outcome),
    }
}

/// Format a sync sweep report.
///
/// # Errors
///
/// Returns `PosError::Parse` if JSON serialization fails.
pub fn format_sync_report(report: &SyncReport, format: OutputFormat) -> Result<String, PosError> {
    match format {
        OutputFormat::Pretty => Ok(format_sync_report_pretty(report)),
        OutputFormat::Json => format_sync_report_json(report),
    }
}

/// Format queued sales.
///
/// # Errors
///
/// Returns `PosError::Parse` if JSON serialization fails.
pub fn format_records(
    records: &[QueueRecord],
    title: &str,
    format: OutputFormat,
) -> Result<String, PosError> {
    match format {
        OutputFormat::Pretty => Ok(format_records_pretty(records, title)),
        OutputFormat::Json => format_records_json(records, title),
    }
}

/// Format queue statistics.
///
/// # Errors
///
/// Returns `PosError::Parse` if JSON serialization fails.
pub fn format_queue_stats(stats: &QueueStats, format: OutputFormat) -> Result<String, PosError> {
    match format {
        OutputFormat::Pretty => Ok(format_queue_stats_pretty(stats)),
        OutputFormat::Json => format_queue_stats_json(stats),
    }
}
