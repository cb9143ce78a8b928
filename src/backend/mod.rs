//! Remote sales backend.
//!
//! [`SalesBackend`] is the single delivery primitive shared by the sale
//! submission path and the sync engine. [`HttpBackend`] is the production
//! implementation.

pub mod client;
pub mod types;

pub use client::HttpBackend;
pub use types::{DeliveryFailure, DeliveryOutcome, Product, SaleReceipt};

use crate::features::sale::SalePayload;

/// A remote endpoint that accepts sales and answers product lookups.
///
/// Implementations never return errors: every way a call can go wrong is a
/// [`DeliveryOutcome`] variant.
#[cfg_attr(test, mockall::automock)]
pub trait SalesBackend {
    /// Post one sale. Bounded by the sale timeout.
    fn post_sale(&self, sale: &SalePayload) -> DeliveryOutcome<SaleReceipt>;

    /// Look up a product by barcode. Bounded by the lookup timeout.
    fn lookup_product(&self, barcode: &str) -> DeliveryOutcome<Product>;
}
