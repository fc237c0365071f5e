//! # Payment Strategies
//!
//! Flat surcharges per payment method, added after the promotion.

use crate::catalog::Amount;
use std::sync::Arc;
use tracing::info;

/// Core trait for payment methods.
///
/// Each method (cash, QRIS, e-wallet) implements this trait,
/// so the processor can switch methods without code changes.
pub trait PaymentStrategy: Send + Sync {
    /// Flat fee charged by this method
    fn fee(&self) -> Amount;

    /// Method name (for logging and registry lookup)
    fn method_name(&self) -> &'static str;

    /// Total plus this method's fee
    fn apply_fee(&self, total: Amount) -> Amount {
        let fee = self.fee();
        let final_total = total.saturating_add(fee);
        info!(method = self.method_name(), fee, total = final_total, "Payment fee applied");
        final_total
    }
}

/// Type alias for a shared payment strategy (dynamic dispatch)
pub type BoxedPaymentStrategy = Arc<dyn PaymentStrategy>;

/// Cash: no surcharge
#[derive(Debug, Clone, Copy, Default)]
pub struct CashPayment;

impl PaymentStrategy for CashPayment {
    fn fee(&self) -> Amount {
        0
    }

    fn method_name(&self) -> &'static str {
        "cash"
    }
}

/// QRIS
#[derive(Debug, Clone, Copy, Default)]
pub struct QrisPayment;

impl QrisPayment {
    pub const FEE: Amount = 1_000;
}

impl PaymentStrategy for QrisPayment {
    fn fee(&self) -> Amount {
        Self::FEE
    }

    fn method_name(&self) -> &'static str {
        "qris"
    }
}

/// E-wallet
#[derive(Debug, Clone, Copy, Default)]
pub struct EWalletPayment;

impl EWalletPayment {
    pub const FEE: Amount = 1_500;
}

impl PaymentStrategy for EWalletPayment {
    fn fee(&self) -> Amount {
        Self::FEE
    }

    fn method_name(&self) -> &'static str {
        "e-wallet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cash_is_identity() {
        for total in [0, 1, 72_000, Amount::MAX] {
            assert_eq!(CashPayment.apply_fee(total), total);
        }
    }

    #[test]
    fn test_flat_fees() {
        for total in [0, 72_000, 145_000] {
            assert_eq!(QrisPayment.apply_fee(total), total + 1_000);
            assert_eq!(EWalletPayment.apply_fee(total), total + 1_500);
        }
    }

    #[test]
    fn test_fee_saturates() {
        assert_eq!(QrisPayment.apply_fee(Amount::MAX), Amount::MAX);
    }

    #[test]
    fn test_method_names() {
        assert_eq!(CashPayment.method_name(), "cash");
        assert_eq!(QrisPayment.method_name(), "qris");
        assert_eq!(EWalletPayment.method_name(), "e-wallet");
    }
}
