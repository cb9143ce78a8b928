use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Product returned by the barcode lookup endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub name: String,
    pub price: f64,
}

/// Successful response to a posted sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleReceipt {
    /// Receipt text to show the operator, verbatim.
    pub receipt_text: String,
    /// Any other fields the backend returned.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of one delivery attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryOutcome<T> {
    /// The backend answered with a success status and a decodable body.
    Success(T),
    /// Connection failed, or the success body could not be decoded.
    TransportError(String),
    /// The backend answered with a non-success status.
    HttpError(u16),
    /// No answer within the timeout.
    Timeout,
}

/// Why a delivery did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeliveryFailure {
    Transport { message: String },
    Http { status: u16 },
    Timeout,
}

impl<T> DeliveryOutcome<T> {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Split into the success value or the failure cause.
    ///
    /// # Errors
    ///
    /// Returns the [`DeliveryFailure`] for every non-success variant.
    pub fn into_result(self) -> Result<T, DeliveryFailure> {
        match self {
            Self::Success(value) => Ok(value),
            Self::TransportError(message) => Err(DeliveryFailure::Transport { message }),
            Self::HttpError(status) => Err(DeliveryFailure::Http { status }),
            Self::Timeout => Err(DeliveryFailure::Timeout),
        }
    }
}

impl std::fmt::Display for DeliveryFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport { message } => write!(f, "backend unreachable ({message})"),
            Self::Http { status } => write!(f, "backend returned HTTP {status}"),
            Self::Timeout => write!(f, "backend timed out"),
        }
    }
}
