//! Queue inspection commands.

use crate::cli::args::{OutputFormat, QueueCommands, StatusFilter};
use crate::error::PosError;
use crate::features::sync::{QueueStatus, QueueStore};
use crate::output::{format_queue_stats, format_records};

/// Execute queue subcommands.
///
/// # Errors
///
/// Returns an error if the queue cannot be read.
pub fn queue(
    store: &QueueStore,
    cmd: QueueCommands,
    format: OutputFormat,
) -> Result<String, PosError> {
    match cmd {
        QueueCommands::List { status, limit } => list(store, status, limit, format),
        QueueCommands::Status => format_queue_stats(&store.stats()?, format),
    }
}

fn list(
    store: &QueueStore,
    filter: StatusFilter,
    limit: usize,
    format: OutputFormat,
) -> Result<String, PosError> {
    let (mut records, title) = match filter {
        StatusFilter::All => (store.list_all()?, "Queued sales"),
        StatusFilter::Pending => (store.list_by_status(QueueStatus::Pending)?, "Pending sales"),
        StatusFilter::Synced => (store.list_by_status(QueueStatus::Synced)?, "Synced sales"),
    };
    records.truncate(limit);

    format_records(&records, title, format)
}
