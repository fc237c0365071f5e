//! # cafe-core
//!
//! Core types and traits for the cafe order pipeline.
//!
//! This crate provides:
//! - `Item`, `PriceCatalog` and `CafePriceCatalog` for menu pricing
//! - `PromotionStrategy` with dine-in, take-away and happy-hour discounts
//! - `PaymentStrategy` with cash, QRIS and e-wallet fees
//! - `ReceiptPrinter` and the `Receipt` it emits
//! - `OrderProcessor`, which sequences the stages above
//! - `StrategyRegistry` for picking strategies by name
//! - `OrderError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use cafe_core::{
//!     CafePriceCatalog, DineInPromo, LogReceiptPrinter, OrderProcessor, QrisPayment,
//! };
//! use std::sync::Arc;
//!
//! let processor = OrderProcessor::new(
//!     Arc::new(DineInPromo),
//!     Arc::new(QrisPayment),
//!     Arc::new(CafePriceCatalog::new()),
//!     Arc::new(LogReceiptPrinter::default()),
//! );
//!
//! let total = processor.process(&["espresso", "latte", "americano"]).unwrap();
//! assert_eq!(total, 73_000);
//! ```

pub mod catalog;
pub mod error;
pub mod payment;
pub mod processor;
pub mod promotion;
pub mod receipt;
pub mod strategy;

// Re-exports for convenience
pub use catalog::{Amount, CafePriceCatalog, Item, PriceCatalog};
pub use error::{OrderError, OrderResult, StrategyKind};
pub use payment::{BoxedPaymentStrategy, CashPayment, EWalletPayment, PaymentStrategy, QrisPayment};
pub use processor::{BoxedPriceCatalog, OrderProcessor};
pub use promotion::{
    BoxedPromotionStrategy, DineInPromo, HappyHourPromo, NoPromotion, PromotionStrategy,
    TakeAwayPromo,
};
pub use receipt::{
    BoxedReceiptPrinter, BufferedReceiptPrinter, LogReceiptPrinter, Receipt, ReceiptFormat,
    ReceiptPrinter,
};
pub use strategy::StrategyRegistry;
