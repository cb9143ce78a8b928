//! Sale creation and submission.
//!
//! A sale is built once into an immutable [`SalePayload`], posted to the
//! backend, and queued locally if the post does not succeed.

pub mod payload;
pub mod submit;

pub use payload::{client_txn_id, LineItem, SalePayload};
pub use submit::{SaleSubmitter, SubmitOutcome};
