//! # Order Processor
//!
//! Sequences one order through the pipeline:
//! catalog → promotion → payment fee → receipt.
//!
//! The processor holds no pricing, discount or fee rules of its own.
//! Every rule lives behind a trait object supplied at construction.

use crate::catalog::{Amount, PriceCatalog};
use crate::error::OrderResult;
use crate::payment::BoxedPaymentStrategy;
use crate::promotion::BoxedPromotionStrategy;
use crate::receipt::BoxedReceiptPrinter;
use std::sync::Arc;
use tracing::info_span;

/// Type alias for a shared price catalog (dynamic dispatch)
pub type BoxedPriceCatalog = Arc<dyn PriceCatalog>;

/// Coordinates a single order from item names to final total
#[derive(Clone)]
pub struct OrderProcessor {
    promotion: BoxedPromotionStrategy,
    payment: BoxedPaymentStrategy,
    catalog: BoxedPriceCatalog,
    printer: BoxedReceiptPrinter,
}

impl OrderProcessor {
    pub fn new(
        promotion: BoxedPromotionStrategy,
        payment: BoxedPaymentStrategy,
        catalog: BoxedPriceCatalog,
        printer: BoxedReceiptPrinter,
    ) -> Self {
        Self {
            promotion,
            payment,
            catalog,
            printer,
        }
    }

    /// Run the pipeline and return the amount to pay.
    ///
    /// # Errors
    /// `OrderError::ItemNotFound` if any item is not in the catalog.
    /// Nothing after the catalog stage runs in that case, so no receipt
    /// is printed.
    pub fn process<S: AsRef<str>>(&self, items: &[S]) -> OrderResult<Amount> {
        let _span = info_span!(
            "process_order",
            catalog = self.catalog.catalog_name(),
            promotion = self.promotion.promotion_name(),
            payment = self.payment.method_name(),
        )
        .entered();

        let items: Vec<&str> = items.iter().map(|s| s.as_ref()).collect();

        let total = self.catalog.calculate(&items)?;
        let total = self.promotion.apply(total);
        let total = self.payment.apply_fee(total);
        self.printer.print_receipt(&items, total);

        Ok(total)
    }
}
