//! # Checkout Configuration
//!
//! Immutable pricing parameters for the checkout pipeline.
//!
//! ## Why a Config Value?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Strategy                               │
//! │                                                                         │
//! │  Crate constants (lib.rs)          CheckoutConfig (this file)          │
//! │  ──────────────────────────        ───────────────────────────         │
//! │  TAX_RATE, SAVE20_THRESHOLD, ...   A plain value assembled from the    │
//! │  Fixed at compile time.            constants by Default and passed     │
//! │                                    into pricing explicitly.            │
//! │                                                                         │
//! │  Production callers use process_checkout() and never see the config.   │
//! │  Tests build a CheckoutConfig with different rates and call            │
//! │  process_checkout_with_config() - no process-wide state to mutate.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The config is read-only after construction. Sharing one instance across
//! concurrent callers needs no locking.

use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_CURRENCY, SAVE10_DISCOUNT_RATE, SAVE20_FULL_RATE, SAVE20_MIN_RATE, SAVE20_THRESHOLD,
    TAX_RATE, VIP_FULL_DISCOUNT, VIP_MIN_DISCOUNT, VIP_THRESHOLD,
};

// =============================================================================
// Coupon Rule Parameters
// =============================================================================

/// Parameters for a percentage-of-subtotal coupon (`SAVE10`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentageRule {
    /// Fraction of the subtotal taken off (0.10 = 10%).
    pub rate: f64,
}

/// Parameters for a two-tier percentage coupon (`SAVE20`).
///
/// Orders at or above the threshold get the full rate; smaller orders get
/// the reduced rate. The threshold comparison is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TieredPercentageRule {
    /// Subtotal (in currency units) at which the full rate kicks in.
    pub threshold: f64,
    /// Rate applied when `subtotal >= threshold`.
    pub full_rate: f64,
    /// Rate applied below the threshold.
    pub reduced_rate: f64,
}

/// Parameters for a flat-amount coupon (`VIP`).
///
/// The discount is a fixed amount, never proportional to the subtotal. A
/// large order does not earn a larger VIP discount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatAmountRule {
    /// Subtotal (in currency units) at which the full amount kicks in.
    pub threshold: f64,
    /// Amount taken off when `subtotal >= threshold`.
    pub full_amount: i64,
    /// Amount taken off below the threshold.
    pub reduced_amount: i64,
}

// =============================================================================
// Checkout Config
// =============================================================================

/// All pricing parameters for one checkout computation.
///
/// Constructed once (usually via `Default`) and passed by reference into the
/// pricing functions. Never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Flat tax rate applied to the discounted subtotal (0.21 = 21%).
    pub tax_rate: f64,

    /// Currency assigned when the request does not name one.
    pub default_currency: String,

    /// `SAVE10` coupon parameters.
    pub save10: PercentageRule,

    /// `SAVE20` coupon parameters.
    pub save20: TieredPercentageRule,

    /// `VIP` coupon parameters.
    pub vip: FlatAmountRule,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        CheckoutConfig {
            tax_rate: TAX_RATE,
            default_currency: DEFAULT_CURRENCY.to_string(),
            save10: PercentageRule {
                rate: SAVE10_DISCOUNT_RATE,
            },
            save20: TieredPercentageRule {
                threshold: SAVE20_THRESHOLD,
                full_rate: SAVE20_FULL_RATE,
                reduced_rate: SAVE20_MIN_RATE,
            },
            vip: FlatAmountRule {
                threshold: VIP_THRESHOLD,
                full_amount: VIP_FULL_DISCOUNT,
                reduced_amount: VIP_MIN_DISCOUNT,
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
