//! # Pricing Module
//!
//! Subtotal, discount, tax, and total math for the checkout pipeline.
//!
//! ## Computation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Pricing Pipeline                                  │
//! │                                                                         │
//! │  items ──► calculate_subtotal ──► Σ price × qty            (f64)       │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  coupon ─► calculate_discount ──► whole currency units     (i64)       │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │          calculate_totals                                               │
//! │            after_discount = max(subtotal - discount, 0)                │
//! │            tax   = trunc(after_discount × tax_rate)                    │
//! │            total = trunc(after_discount) + tax                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Truncation, Not Rounding
//! Fractional amounts are cut toward zero (`int`-style) when they become
//! whole currency units. `trunc(9.9995)` is `9`, never `10`. The tier
//! boundaries in the tests depend on this; half-up or half-even rounding
//! would change observable results.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::CheckoutConfig;
use crate::error::{CheckoutError, CheckoutResult};
use crate::request::LineItem;

// =============================================================================
// Coupon
// =============================================================================

/// The closed set of recognized coupon codes.
///
/// Every code selects one fixed discount policy. There is no open-ended
/// matching: a code outside this set is an [`CheckoutError::UnknownCoupon`],
/// not a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Coupon {
    /// 10% off the subtotal.
    Save10,
    /// 20% off at or above the threshold, 5% below it.
    Save20,
    /// Flat amount off; larger flat amount at or above the threshold.
    Vip,
}

impl Coupon {
    /// Parses a coupon code.
    ///
    /// An empty code means "no coupon" and is not an error, mirroring an
    /// empty coupon input box at the edge.
    pub fn from_code(code: &str) -> CheckoutResult<Option<Coupon>> {
        match code {
            "" => Ok(None),
            "SAVE10" => Ok(Some(Coupon::Save10)),
            "SAVE20" => Ok(Some(Coupon::Save20)),
            "VIP" => Ok(Some(Coupon::Vip)),
            other => Err(CheckoutError::UnknownCoupon {
                code: other.to_string(),
            }),
        }
    }

    /// Parses the raw `coupon` field of a request.
    ///
    /// Absent means "no coupon". A present non-string value cannot name any
    /// known code, so it fails like an unrecognized string.
    pub fn from_request(raw: Option<&Value>) -> CheckoutResult<Option<Coupon>> {
        match raw {
            None => Ok(None),
            Some(Value::String(code)) => Coupon::from_code(code),
            Some(other) => Err(CheckoutError::UnknownCoupon {
                code: other.to_string(),
            }),
        }
    }

    /// The wire code for this coupon.
    pub const fn code(&self) -> &'static str {
        match self {
            Coupon::Save10 => "SAVE10",
            Coupon::Save20 => "SAVE20",
            Coupon::Vip => "VIP",
        }
    }
}

// =============================================================================
// Subtotal
// =============================================================================

/// Sums the line totals of all items in one linear pass.
///
/// The sum stays in `f64`: fractional prices keep their fractional part
/// here, and only the output boundary truncates.
pub fn calculate_subtotal(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::line_total).sum()
}

// =============================================================================
// Discount
// =============================================================================

/// Computes the discount in whole currency units.
///
/// Percentage discounts are truncated toward zero. The VIP discount is a
/// flat amount and needs no truncation.
pub fn calculate_discount(coupon: Option<Coupon>, subtotal: f64, config: &CheckoutConfig) -> i64 {
    match coupon {
        None => 0,
        Some(Coupon::Save10) => truncate(subtotal * config.save10.rate),
        Some(Coupon::Save20) => {
            // Inclusive threshold: exactly 200 earns the full rate.
            let rate = if subtotal >= config.save20.threshold {
                config.save20.full_rate
            } else {
                config.save20.reduced_rate
            };
            truncate(subtotal * rate)
        }
        Some(Coupon::Vip) => {
            // Inclusive threshold: exactly 100 earns the full amount.
            if subtotal >= config.vip.threshold {
                config.vip.full_amount
            } else {
                config.vip.reduced_amount
            }
        }
    }
}

// =============================================================================
// Totals
// =============================================================================

/// The priced order, with every monetary field in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Truncated pre-discount subtotal.
    pub subtotal: i64,
    /// Discount taken off the subtotal.
    pub discount: i64,
    /// Tax on the discounted amount.
    pub tax: i64,
    /// Discounted amount plus tax.
    pub total: i64,
}

/// Applies the discount, taxes the remainder, and truncates to whole units.
///
/// The discounted amount is clamped at zero before tax, so a discount larger
/// than the subtotal can never produce a negative total.
pub fn calculate_totals(subtotal: f64, discount: i64, config: &CheckoutConfig) -> OrderTotals {
    let after_discount = (subtotal - discount as f64).max(0.0);
    let tax = truncate(after_discount * config.tax_rate);

    OrderTotals {
        subtotal: truncate(subtotal),
        discount,
        tax,
        total: truncate(after_discount) + tax,
    }
}

/// Cuts a fractional amount toward zero.
///
/// Pricing amounts are non-negative and far below `i64::MAX`, where the
/// `as` cast is exact truncation.
#[inline]
fn truncate(amount: f64) -> i64 {
    amount as i64
}

// =============================================================================
// Unit Tests
// =============================================================================
