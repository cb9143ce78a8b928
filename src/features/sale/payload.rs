//! Sale payload types.
//!
//! The serialized form of [`SalePayload`] is exactly the body posted to
//! `POST /sales/` and the text stored in the offline queue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PosError;

/// One line of a sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    pub qty: u32,
    pub unit_price: f64,
}

impl LineItem {
    #[must_use]
    pub fn new(sku: impl Into<String>, qty: u32, unit_price: f64) -> Self {
        Self {
            sku: sku.into(),
            qty,
            unit_price,
        }
    }

    /// `qty × unit_price`.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        f64::from(self.qty) * self.unit_price
    }
}

/// Snapshot of a sale at creation time.
///
/// Fields are private; totals are computed in [`SalePayload::new`] and the
/// value cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalePayload {
    client_txn_id: String,
    store_id: String,
    items: Vec<LineItem>,
    subtotal: f64,
    tax: f64,
    total: f64,
    payment_status: String,
}

impl SalePayload {
    /// Build a payload and compute its totals. Tax is always zero.
    ///
    /// # Errors
    ///
    /// Returns `PosError::InvalidInput` if there are no items, a quantity is
    /// zero, a sku is blank, or a price is negative or not finite.
    pub fn new(
        client_txn_id: String,
        store_id: String,
        items: Vec<LineItem>,
        payment_status: String,
    ) -> Result<Self, PosError> {
        if items.is_empty() {
            return Err(PosError::InvalidInput(
                "A sale needs at least one item".to_string(),
            ));
        }

        for item in &items {
            if item.sku.trim().is_empty() {
                return Err(PosError::InvalidInput("SKU must not be empty".to_string()));
            }
            if item.qty == 0 {
                return Err(PosError::InvalidInput(format!(
                    "Quantity for {} must be at least 1",
                    item.sku
                )));
            }
            if !item.unit_price.is_finite() || item.unit_price < 0.0 {
                return Err(PosError::InvalidInput(format!(
                    "Invalid unit price for {}: {}",
                    item.sku, item.unit_price
                )));
            }
        }

        let subtotal: f64 = items.iter().map(LineItem::line_total).sum();
        let tax = 0.0;

        Ok(Self {
            client_txn_id,
            store_id,
            items,
            subtotal,
            tax,
            total: subtotal + tax,
            payment_status,
        })
    }

    /// Build a payload for `store_id` with a transaction id stamped at `at`.
    ///
    /// # Errors
    ///
    /// See [`SalePayload::new`].
    pub fn create(
        store_id: &str,
        items: Vec<LineItem>,
        payment_status: &str,
        at: DateTime<Utc>,
    ) -> Result<Self, PosError> {
        Self::new(
            client_txn_id(store_id, at),
            store_id.to_string(),
            items,
            payment_status.to_string(),
        )
    }

    #[must_use]
    pub fn client_txn_id(&self) -> &str {
        &self.client_txn_id
    }

    #[must_use]
    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub const fn subtotal(&self) -> f64 {
        self.subtotal
    }

    #[must_use]
    pub const fn tax(&self) -> f64 {
        self.tax
    }

    #[must_use]
    pub const fn total(&self) -> f64 {
        self.total
    }

    #[must_use]
    pub fn payment_status(&self) -> &str {
        &self.payment_status
    }
}

/// Client transaction id: `{store_id}-{YYYYMMDDhhmmss}` in UTC.
///
/// Second precision only, so two sales for one store within the same second
/// get the same id.
#[must_use]
pub fn client_txn_id(store_id: &str, at: DateTime<Utc>) -> String {
    format!("{store_id}-{}", at.format("%Y%m%d%H%M%S"))
}
