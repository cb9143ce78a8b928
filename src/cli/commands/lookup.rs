//! Product lookup command.

use crate::backend::SalesBackend;
use crate::cli::args::OutputFormat;
use crate::error::PosError;
use crate::output::format_product;

/// Look up `barcode` and format the product.
///
/// # Errors
///
/// Returns `PosError::NotFound` if the lookup does not succeed, with the
/// cause in the message.
pub fn lookup(
    backend: &dyn SalesBackend,
    barcode: &str,
    format: OutputFormat,
) -> Result<String, PosError> {
    let product = backend
        .lookup_product(barcode)
        .into_result()
        .map_err(|reason| PosError::NotFound(format!("Product for barcode {barcode}: {reason}")))?;

    format_product(&product, format)
}
