use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::types::{DeliveryOutcome, Product, SaleReceipt};
use super::SalesBackend;
use crate::config::Session;
use crate::error::PosError;
use crate::features::sale::SalePayload;

/// HTTP implementation of [`SalesBackend`].
pub struct HttpBackend {
    client: Client,
    base_url: String,
    sale_timeout: Duration,
    lookup_timeout: Duration,
}

impl HttpBackend {
    /// Create a backend client for the session's base URL and timeouts.
    ///
    /// # Errors
    ///
    /// Returns `PosError::Http` if the HTTP client cannot be built.
    pub fn new(session: &Session) -> Result<Self, PosError> {
        let client = Client::builder()
            .user_agent(concat!("pos-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PosError::Http(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: session.backend_url.clone(),
            sale_timeout: session.sale_timeout,
            lookup_timeout: session.lookup_timeout,
        })
    }

    /// Append path segments to the base URL, keeping any query or fragment.
    fn endpoint(&self, segments: &[&str]) -> Option<Url> {
        let mut url = Url::parse(&self.base_url).ok()?;
        url.path_segments_mut().ok()?.pop_if_empty().extend(segments);
        Some(url)
    }

    fn sales_url(&self) -> Option<Url> {
        self.endpoint(&["sales", ""])
    }

    fn product_url(&self, barcode: &str) -> Option<Url> {
        self.endpoint(&["products", "by-barcode", barcode])
    }

    fn invalid_base<T>(&self) -> DeliveryOutcome<T> {
        warn!(base_url = %self.base_url, "Backend URL cannot carry a path");
        DeliveryOutcome::TransportError(format!("invalid backend URL '{}'", self.base_url))
    }
}

impl SalesBackend for HttpBackend {
    fn post_sale(&self, sale: &SalePayload) -> DeliveryOutcome<SaleReceipt> {
        let Some(url) = self.sales_url() else {
            return self.invalid_base();
        };
        debug!(url = %url, client_txn_id = %sale.client_txn_id(), "Posting sale");

        let sent = self
            .client
            .post(url)
            .timeout(self.sale_timeout)
            .json(sale)
            .send();

        classify(sent)
    }

    fn lookup_product(&self, barcode: &str) -> DeliveryOutcome<Product> {
        let Some(url) = self.product_url(barcode) else {
            return self.invalid_base();
        };
        debug!(url = %url, "Looking up product");

        let sent = self.client.get(url).timeout(self.lookup_timeout).send();

        classify(sent)
    }
}

/// Map a send result onto a [`DeliveryOutcome`].
fn classify<T: DeserializeOwned>(sent: reqwest::Result<Response>) -> DeliveryOutcome<T> {
    let response = match sent {
        Ok(response) => response,
        Err(e) if e.is_timeout() => return DeliveryOutcome::Timeout,
        Err(e) => return DeliveryOutcome::TransportError(e.to_string()),
    };

    let status = response.status();
    if !status.is_success() {
        return DeliveryOutcome::HttpError(status.as_u16());
    }

    match response.json::<T>() {
        Ok(body) => DeliveryOutcome::Success(body),
        Err(e) if e.is_timeout() => DeliveryOutcome::Timeout,
        Err(e) => DeliveryOutcome::TransportError(format!("invalid response body: {e}")),
    }
}
