//! Sell command.

use crate::backend::SalesBackend;
use crate::cli::args::{OutputFormat, SellArgs};
use crate::config::Session;
use crate::error::PosError;
use crate::features::sale::{LineItem, SaleSubmitter};
use crate::features::sync::QueueStore;
use crate::output::format_submit_outcome;

/// Record one sale: post it, or queue it if the backend is unavailable.
///
/// # Errors
///
/// Returns an error for invalid input, a failed barcode lookup, or a local
/// storage failure while queueing.
pub fn sell(
    backend: &dyn SalesBackend,
    queue: &QueueStore,
    session: &Session,
    args: SellArgs,
    format: OutputFormat,
) -> Result<String, PosError> {
    let mut session = session.clone();
    if let Some(status) = args.payment_status {
        session.payment_status = status;
    }

    let submitter = SaleSubmitter::new(backend, queue, &session);

    let item = match (args.barcode, args.sku, args.price) {
        (Some(barcode), _, _) => submitter.item_for_barcode(&barcode, args.qty)?,
        (None, Some(sku), Some(price)) => LineItem::new(sku, args.qty, price),
        _ => {
            return Err(PosError::InvalidInput(
                "Specify --barcode, or --sku together with --price".to_string(),
            ))
        }
    };

    let outcome = submitter.submit(vec![item])?;
    format_submit_outcome(&outcome, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{DeliveryOutcome, MockSalesBackend, Product};
    use crate::config::{Config, Overrides};
    use crate::storage::Database;

    fn session() -> Session {
        let overrides = Overrides {
            backend_url: None,
            store_id: Some("S1".to_string()),
        };
        Session::resolve(&Config::default(), &overrides).unwrap()
    }

    fn args(barcode: Option<&str>, sku: Option<&str>, price: Option<f64>) -> SellArgs {
        SellArgs {
            sku: sku.map(String::from),
            price,
            barcode: barcode.map(String::from),
            qty: 2,
            payment_status: Some("card".to_string()),
        }
    }

    #[test]
    fn test_sell_by_sku_queues_when_down() {
        let queue = QueueStore::with_database(Database::open_in_memory().unwrap());
        let mut backend = MockSalesBackend::new();
        backend
            .expect_post_sale()
            .returning(|_| DeliveryOutcome::TransportError("refused".to_string()));

        let output = sell(
            &backend,
            &queue,
            &session(),
            args(None, Some("A"), Some(5.0)),
            OutputFormat::Json,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["outcome"], "queued");
        assert_eq!(value["reason"]["kind"], "transport");

        let pending = queue.list_pending().unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].payload.payment_status(), "card");
        assert!((pending[0].payload.total() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sell_by_barcode_uses_backend_price() {
        let queue = QueueStore::with_database(Database::open_in_memory().unwrap());
        let mut backend = MockSalesBackend::new();
        backend.expect_lookup_product().returning(|_| {
            DeliveryOutcome::Success(Product {
                sku: "RICE".to_string(),
                name: "Rice".to_string(),
                price: 1.5,
            })
        });
        backend
            .expect_post_sale()
            .withf(|sale| sale.items()[0].sku == "RICE" && (sale.total() - 3.0).abs() < 1e-9)
            .returning(|_| DeliveryOutcome::HttpError(503));

        sell(
            &backend,
            &queue,
            &session(),
            args(Some("123"), None, None),
            OutputFormat::Pretty,
        )
        .unwrap();

        assert_eq!(queue.list_pending().unwrap().len(), 1);
    }

    #[test]
    fn test_failed_lookup_queues_nothing() {
        let queue = QueueStore::with_database(Database::open_in_memory().unwrap());
        let mut backend = MockSalesBackend::new();
        backend
            .expect_lookup_product()
            .returning(|_| DeliveryOutcome::Timeout);
        backend.expect_post_sale().never();

        let result = sell(
            &backend,
            &queue,
            &session(),
            args(Some("123"), None, None),
            OutputFormat::Pretty,
        );

        assert!(matches!(result, Err(PosError::NotFound(_))));
        assert!(queue.list_all().unwrap().is_empty());
    }
}
