//! # Sample Orders
//!
//! The orders the driver rings up on start: two valid orders and one with
//! an item the cafe does not sell.

use cafe_core::{
    Amount, BoxedPriceCatalog, BoxedReceiptPrinter, OrderProcessor, OrderResult,
    StrategyRegistry,
};
use tracing::{error, info};

/// One order plus the promotion and payment method it uses
#[derive(Debug, Clone)]
pub struct SampleOrder {
    pub label: &'static str,
    pub promotion: &'static str,
    pub payment: &'static str,
    pub items: Vec<&'static str>,
}

/// Dine-in with QRIS, happy hour with cash, take-away with an unknown item
pub fn sample_orders() -> Vec<SampleOrder> {
    vec![
        SampleOrder {
            label: "order 1",
            promotion: "dine-in",
            payment: "qris",
            items: vec!["espresso", "latte", "americano"],
        },
        SampleOrder {
            label: "order 2",
            promotion: "happy-hour",
            payment: "cash",
            items: vec!["latte", "latte", "latte"],
        },
        SampleOrder {
            label: "invalid order",
            promotion: "take-away",
            payment: "e-wallet",
            items: vec!["americano", "cappuccino", "nasi goreng"],
        },
    ]
}

/// Process one sample order with strategies resolved by name.
///
/// The outer result fails on an unknown strategy name; the inner one is the
/// order's own outcome.
pub fn run_order(
    order: &SampleOrder,
    registry: &StrategyRegistry,
    catalog: &BoxedPriceCatalog,
    printer: &BoxedReceiptPrinter,
) -> OrderResult<OrderResult<Amount>> {
    let processor = OrderProcessor::new(
        registry.promotion(order.promotion)?,
        registry.payment(order.payment)?,
        catalog.clone(),
        printer.clone(),
    );

    info!(
        order = order.label,
        promotion = order.promotion,
        payment = order.payment,
        "Processing order"
    );
    let outcome = processor.process(&order.items);
    match &outcome {
        Ok(total) => info!(order = order.label, total, "Order completed"),
        Err(e) => error!(order = order.label, error = %e, "Order rejected"),
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cafe_core::{BufferedReceiptPrinter, CafePriceCatalog, OrderError};
    use std::sync::Arc;

    #[test]
    fn test_sample_orders() {
        let registry = StrategyRegistry::cafe_defaults();
        let catalog: BoxedPriceCatalog = Arc::new(CafePriceCatalog::new());
        let buffer = Arc::new(BufferedReceiptPrinter::new());
        let printer: BoxedReceiptPrinter = buffer.clone();

        let outcomes: Vec<OrderResult<Amount>> = sample_orders()
            .iter()
            .map(|order| run_order(order, &registry, &catalog, &printer).unwrap())
            .collect();

        assert_eq!(outcomes[0], Ok(73_000));
        assert_eq!(outcomes[1], Ok(72_000));
        assert_eq!(
            outcomes[2],
            Err(OrderError::ItemNotFound {
                name: "nasi goreng".into()
            })
        );

        // Rejected order prints nothing
        let totals: Vec<Amount> = buffer.receipts().iter().map(|r| r.total).collect();
        assert_eq!(totals, vec![73_000, 72_000]);
    }

    #[test]
    fn test_unknown_strategy_name() {
        let order = SampleOrder {
            label: "bad",
            promotion: "black-friday",
            payment: "cash",
            items: vec!["latte"],
        };
        let catalog: BoxedPriceCatalog = Arc::new(CafePriceCatalog::new());
        let printer: BoxedReceiptPrinter = Arc::new(BufferedReceiptPrinter::new());

        let err = run_order(&order, &StrategyRegistry::cafe_defaults(), &catalog, &printer)
            .unwrap_err();
        assert!(!err.is_order_rejection());
    }
}
