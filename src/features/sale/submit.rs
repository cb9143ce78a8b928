//! Sale submission: post immediately, queue on failure.

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use super::payload::{LineItem, SalePayload};
use crate::backend::{DeliveryFailure, SaleReceipt, SalesBackend};
use crate::config::Session;
use crate::error::PosError;
use crate::features::sync::{QueueRecord, QueueStore};

/// What happened to a submitted sale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Accepted by the backend. Nothing was written locally.
    Posted {
        payload: SalePayload,
        receipt: SaleReceipt,
    },
    /// Stored in the offline queue for a later sweep.
    Queued {
        record: QueueRecord,
        reason: DeliveryFailure,
    },
}

/// Creates sales for one store and delivers or queues them.
pub struct SaleSubmitter<'a> {
    backend: &'a dyn SalesBackend,
    queue: &'a QueueStore,
    session: &'a Session,
}

impl<'a> SaleSubmitter<'a> {
    #[must_use]
    pub fn new(
        backend: &'a dyn SalesBackend,
        queue: &'a QueueStore,
        session: &'a Session,
    ) -> Self {
        Self {
            backend,
            queue,
            session,
        }
    }

    /// Build a sale from `items`, stamped now, and submit it.
    ///
    /// # Errors
    ///
    /// Returns `PosError::InvalidInput` for an invalid sale, or a database
    /// error if the sale had to be queued and could not be stored.
    pub fn submit(&self, items: Vec<LineItem>) -> Result<SubmitOutcome, PosError> {
        let payload = SalePayload::create(
            &self.session.store_id,
            items,
            &self.session.payment_status,
            Utc::now(),
        )?;
        self.deliver(payload)
    }

    /// Make one delivery attempt for `payload`; queue it if that fails.
    ///
    /// # Errors
    ///
    /// Returns a database error if the sale had to be queued and could not
    /// be stored.
    pub fn deliver(&self, payload: SalePayload) -> Result<SubmitOutcome, PosError> {
        match self.backend.post_sale(&payload).into_result() {
            Ok(receipt) => {
                info!(client_txn_id = %payload.client_txn_id(), "Sale posted");
                Ok(SubmitOutcome::Posted { payload, receipt })
            }
            Err(reason) => {
                warn!(
                    client_txn_id = %payload.client_txn_id(),
                    %reason,
                    "Sale not delivered, queueing"
                );
                let record = self.queue.enqueue(&payload)?;
                Ok(SubmitOutcome::Queued { record, reason })
            }
        }
    }

    /// Resolve a barcode into a line item priced by the backend.
    ///
    /// # Errors
    ///
    /// Returns `PosError::NotFound` if the lookup does not succeed. A sale
    /// cannot be queued without a price, so nothing is stored.
    pub fn item_for_barcode(&self, barcode: &str, qty: u32) -> Result<LineItem, PosError> {
        let product = self
            .backend
            .lookup_product(barcode)
            .into_result()
            .map_err(|reason| {
                PosError::NotFound(format!("Product for barcode {barcode}: {reason}"))
            })?;

        Ok(LineItem::new(product.sku, qty, product.price))
    }
}
