//! # Promotion Strategies
//!
//! Discount rules applied once to an order's pre-fee total.
//! A promotion never raises the total.

use crate::catalog::Amount;
use std::sync::Arc;
use tracing::info;

/// Core trait for promotions
pub trait PromotionStrategy: Send + Sync {
    /// Discounted total. Depends on `total` only.
    fn apply(&self, total: Amount) -> Amount;

    /// Promotion name (for logging and registry lookup)
    fn promotion_name(&self) -> &'static str;
}

/// Type alias for a shared promotion strategy (dynamic dispatch)
pub type BoxedPromotionStrategy = Arc<dyn PromotionStrategy>;

/// Subtract a flat discount when total is strictly above the threshold
fn flat_discount_above(total: Amount, threshold: Amount, discount: Amount) -> Amount {
    if total > threshold {
        discount.min(total)
    } else {
        0
    }
}

fn log_discount(promotion: &'static str, discount: Amount, final_total: Amount) {
    if discount > 0 {
        info!(promotion, discount, "Promotion applied");
    } else {
        info!(promotion, "Promotion not applicable, no discount");
    }
    info!(promotion, total = final_total, "Total after promotion");
}

/// Dine-in: flat discount on large orders
#[derive(Debug, Clone, Copy, Default)]
pub struct DineInPromo;

impl DineInPromo {
    pub const THRESHOLD: Amount = 100_000;
    pub const DISCOUNT: Amount = 10_000;
}

impl PromotionStrategy for DineInPromo {
    fn apply(&self, total: Amount) -> Amount {
        let discount = flat_discount_above(total, Self::THRESHOLD, Self::DISCOUNT);
        let final_total = total - discount;
        log_discount(self.promotion_name(), discount, final_total);
        final_total
    }

    fn promotion_name(&self) -> &'static str {
        "dine-in"
    }
}

/// Take-away: smaller flat discount with a lower threshold
#[derive(Debug, Clone, Copy, Default)]
pub struct TakeAwayPromo;

impl TakeAwayPromo {
    pub const THRESHOLD: Amount = 80_000;
    pub const DISCOUNT: Amount = 5_000;
}

impl PromotionStrategy for TakeAwayPromo {
    fn apply(&self, total: Amount) -> Amount {
        let discount = flat_discount_above(total, Self::THRESHOLD, Self::DISCOUNT);
        let final_total = total - discount;
        log_discount(self.promotion_name(), discount, final_total);
        final_total
    }

    fn promotion_name(&self) -> &'static str {
        "take-away"
    }
}

/// Happy hour: 20% off everything, discount rounded down
#[derive(Debug, Clone, Copy, Default)]
pub struct HappyHourPromo;

impl HappyHourPromo {
    /// Discount rate as a fraction: 1/5 = 20%
    pub const RATE_DENOMINATOR: Amount = 5;
}

impl PromotionStrategy for HappyHourPromo {
    fn apply(&self, total: Amount) -> Amount {
        // floor(total * 0.2), exact in integers
        let discount = total / Self::RATE_DENOMINATOR;
        let final_total = total - discount;
        log_discount(self.promotion_name(), discount, final_total);
        final_total
    }

    fn promotion_name(&self) -> &'static str {
        "happy-hour"
    }
}

/// No promotion: total passes through unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPromotion;

impl PromotionStrategy for NoPromotion {
    fn apply(&self, total: Amount) -> Amount {
        total
    }

    fn promotion_name(&self) -> &'static str {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dine_in_threshold_is_strict() {
        assert_eq!(DineInPromo.apply(100_000), 100_000);
        assert_eq!(DineInPromo.apply(100_001), 90_001);
        assert_eq!(DineInPromo.apply(72_000), 72_000);
        assert_eq!(DineInPromo.apply(0), 0);
    }

    #[test]
    fn test_take_away_threshold_is_strict() {
        assert_eq!(TakeAwayPromo.apply(80_000), 80_000);
        assert_eq!(TakeAwayPromo.apply(80_001), 75_001);
        assert_eq!(TakeAwayPromo.apply(150_000), 145_000);
    }

    #[test]
    fn test_happy_hour_rounds_discount_down() {
        assert_eq!(HappyHourPromo.apply(90_000), 72_000);
        assert_eq!(HappyHourPromo.apply(0), 0);
        assert_eq!(HappyHourPromo.apply(4), 4);
        assert_eq!(HappyHourPromo.apply(9), 8);
        for total in [1, 7, 12_345, 99_999, 1_000_003] {
            assert_eq!(HappyHourPromo.apply(total), total - total / 5);
        }
    }

    #[test]
    fn test_promotions_never_increase_total() {
        let promos: [&dyn PromotionStrategy; 4] =
            [&DineInPromo, &TakeAwayPromo, &HappyHourPromo, &NoPromotion];
        for promo in promos {
            for total in [0, 1, 80_000, 80_001, 100_000, 100_001, Amount::MAX] {
                assert!(promo.apply(total) <= total, "{}", promo.promotion_name());
            }
        }
    }

    #[test]
    fn test_no_promotion_is_identity() {
        assert_eq!(NoPromotion.apply(123_456), 123_456);
    }
}
