//! Sync command.

use crate::backend::SalesBackend;
use crate::cli::args::OutputFormat;
use crate::error::PosError;
use crate::features::sync::{QueueStore, SyncEngine};
use crate::output::format_sync_report;

/// Run one sweep over the pending queue.
///
/// # Errors
///
/// Returns an error if the queue cannot be read or updated.
pub fn sync(
    backend: &dyn SalesBackend,
    queue: &QueueStore,
    format: OutputFormat,
) -> Result<String, PosError> {
    let report = SyncEngine::new(backend, queue).sweep()?;
    format_sync_report(&report, format)
}
