//! Sync sweep over pending queue records.

use tracing::{debug, info, warn};

use super::queue::QueueStore;
use crate::backend::SalesBackend;
use crate::error::PosError;

/// Counts from one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Pending records found at the start of the sweep.
    pub attempted: usize,
    /// Records this sweep flipped to synced.
    pub synced: usize,
}

impl SyncReport {
    /// Records left pending by this sweep.
    #[must_use]
    pub const fn still_pending(&self) -> usize {
        self.attempted - self.synced
    }
}

/// Re-delivers queued sales.
pub struct SyncEngine<'a> {
    backend: &'a dyn SalesBackend,
    queue: &'a QueueStore,
}

impl<'a> SyncEngine<'a> {
    #[must_use]
    pub fn new(backend: &'a dyn SalesBackend, queue: &'a QueueStore) -> Self {
        Self { backend, queue }
    }

    /// Attempt every pending record once, in insertion order.
    ///
    /// A failed delivery leaves its record pending and the sweep moves on.
    /// Rows whose payload cannot be decoded are skipped and stay pending.
    ///
    /// # Errors
    ///
    /// Returns an error only if the queue cannot be read or updated.
    pub fn sweep(&self) -> Result<SyncReport, PosError> {
        let pending = self.queue.list_pending()?;
        let mut report = SyncReport {
            attempted: pending.len(),
            synced: 0,
        };

        for record in pending {
            match self.backend.post_sale(&record.payload).into_result() {
                Ok(_) => {
                    if self.queue.mark_synced(record.id)? {
                        report.synced += 1;
                    } else {
                        debug!(id = record.id, "Already synced by another sweep");
                    }
                }
                Err(reason) => {
                    warn!(
                        id = record.id,
                        client_txn_id = %record.client_txn_id,
                        %reason,
                        "Queued sale not delivered"
                    );
                }
            }
        }

        info!(
            attempted = report.attempted,
            synced = report.synced,
            "Sync sweep finished"
        );
        Ok(report)
    }
}
