//! Error types for pos-client.

use thiserror::Error;

/// Errors surfaced by the cashier client.
///
/// Delivery failures (unreachable backend, non-success status, timeout) are
/// not errors: they are reported through
/// [`DeliveryOutcome`](crate::backend::DeliveryOutcome) and lead to queueing.
#[derive(Error, Debug)]
pub enum PosError {
    /// Local storage failure. Fatal to the current operation.
    #[error("Database error: {0}")]
    Database(String),

    /// Invalid or unreadable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Operator input rejected before anything was attempted.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<rusqlite::Error> for PosError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database(e.to_string())
    }
}
