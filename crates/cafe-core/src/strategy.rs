//! # Strategy Registry
//!
//! Name-based lookup of promotion and payment strategies.
//!
//! ## Design Pattern
//!
//! Promotions and payment methods use the Strategy design pattern: the
//! `OrderProcessor` only sees the traits, so a new promotion or payment
//! method is a new type passed in at construction. The registry lets a
//! caller pick those types from configuration strings.
//!
//! ```text
//! ┌──────────────────────────┐   ┌──────────────────────────┐
//! │ PromotionStrategy (trait)│   │  PaymentStrategy (trait) │
//! │  └── apply()             │   │  └── apply_fee()         │
//! └──────────────────────────┘   └──────────────────────────┘
//!        ▲                              ▲
//!   ┌────┼──────────┐             ┌─────┼──────┐
//!   │    │          │             │     │      │
//! DineIn TakeAway HappyHour     Cash  Qris  EWallet
//! ```

use crate::error::{OrderError, OrderResult, StrategyKind};
use crate::payment::{BoxedPaymentStrategy, CashPayment, EWalletPayment, QrisPayment};
use crate::promotion::{
    BoxedPromotionStrategy, DineInPromo, HappyHourPromo, NoPromotion, TakeAwayPromo,
};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Registry of named promotion and payment strategies
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    promotions: BTreeMap<String, BoxedPromotionStrategy>,
    payments: BTreeMap<String, BoxedPaymentStrategy>,
}

impl StrategyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every strategy the cafe offers
    pub fn cafe_defaults() -> Self {
        Self::new()
            .with_promotion(Arc::new(DineInPromo))
            .with_promotion(Arc::new(TakeAwayPromo))
            .with_promotion(Arc::new(HappyHourPromo))
            .with_promotion(Arc::new(NoPromotion))
            .with_payment(Arc::new(CashPayment))
            .with_payment(Arc::new(QrisPayment))
            .with_payment(Arc::new(EWalletPayment))
    }

    /// Register a promotion under its own name
    pub fn register_promotion(&mut self, promotion: BoxedPromotionStrategy) {
        let name = promotion.promotion_name().to_string();
        self.promotions.insert(name, promotion);
    }

    /// Register a payment method under its own name
    pub fn register_payment(&mut self, payment: BoxedPaymentStrategy) {
        let name = payment.method_name().to_string();
        self.payments.insert(name, payment);
    }

    /// Register with builder pattern
    pub fn with_promotion(mut self, promotion: BoxedPromotionStrategy) -> Self {
        self.register_promotion(promotion);
        self
    }

    /// Register with builder pattern
    pub fn with_payment(mut self, payment: BoxedPaymentStrategy) -> Self {
        self.register_payment(payment);
        self
    }

    /// Get a promotion by name
    pub fn promotion(&self, name: &str) -> OrderResult<BoxedPromotionStrategy> {
        self.promotions
            .get(name)
            .cloned()
            .ok_or_else(|| OrderError::UnknownStrategy {
                kind: StrategyKind::Promotion,
                name: name.to_string(),
            })
    }

    /// Get a payment method by name
    pub fn payment(&self, name: &str) -> OrderResult<BoxedPaymentStrategy> {
        self.payments
            .get(name)
            .cloned()
            .ok_or_else(|| OrderError::UnknownStrategy {
                kind: StrategyKind::Payment,
                name: name.to_string(),
            })
    }

    /// List registered promotions
    pub fn promotion_names(&self) -> Vec<&str> {
        self.promotions.keys().map(|s| s.as_str()).collect()
    }

    /// List registered payment methods
    pub fn payment_names(&self) -> Vec<&str> {
        self.payments.keys().map(|s| s.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Amount;
    use crate::promotion::PromotionStrategy;

    #[test]
    fn test_cafe_defaults() {
        let registry = StrategyRegistry::cafe_defaults();

        assert_eq!(
            registry.promotion_names(),
            vec!["dine-in", "happy-hour", "none", "take-away"]
        );
        assert_eq!(registry.payment_names(), vec!["cash", "e-wallet", "qris"]);
        assert_eq!(registry.promotion("happy-hour").unwrap().apply(90_000), 72_000);
        assert_eq!(registry.payment("qris").unwrap().apply_fee(72_000), 73_000);
    }

    #[test]
    fn test_unknown_strategy() {
        let registry = StrategyRegistry::new();

        assert!(registry.promotion_names().is_empty());
        assert_eq!(
            registry.payment("crypto").err(),
            Some(OrderError::UnknownStrategy {
                kind: StrategyKind::Payment,
                name: "crypto".into()
            })
        );
        assert!(registry.promotion("dine-in").is_err());
    }

    #[test]
    fn test_register_custom_promotion() {
        struct MemberDay;

        impl PromotionStrategy for MemberDay {
            fn apply(&self, total: Amount) -> Amount {
                total.saturating_sub(2_000)
            }

            fn promotion_name(&self) -> &'static str {
                "member-day"
            }
        }

        let mut registry = StrategyRegistry::cafe_defaults();
        registry.register_promotion(Arc::new(MemberDay));

        assert_eq!(registry.promotion("member-day").unwrap().apply(10_000), 8_000);
    }
}
