//! Feature implementations for pos-client.
//!
//! - Sale creation and submission
//! - Offline sales queue and sync sweep

pub mod sale;
pub mod sync;
