//! # Checkout Orchestration
//!
//! The single entry point that runs the whole pipeline.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      process_checkout                                   │
//! │                                                                         │
//! │  request: &Value                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_request ──► validate_request ──► calculate_subtotal             │
//! │                         │                     │                         │
//! │                         │                     ▼                         │
//! │                         │            Coupon::from_request              │
//! │                         │                     │                         │
//! │                         │                     ▼                         │
//! │                         │            calculate_discount                │
//! │                         │                     │                         │
//! │                         ▼                     ▼                         │
//! │                   resolved currency    calculate_totals                │
//! │                         │                     │                         │
//! │                         └────────┬────────────┘                         │
//! │                                  ▼                                      │
//! │                    generate_order_id ──► OrderSummary                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failures from validation or coupon parsing surface to the caller
//! unchanged. The orchestrator adds nothing: no wrapping, no recovery, no
//! logging, no I/O. Same request in, same summary out, which is what makes
//! the pipeline safe to call from any number of concurrent handlers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::CheckoutConfig;
use crate::error::CheckoutResult;
use crate::pricing::{calculate_discount, calculate_subtotal, calculate_totals, Coupon};
use crate::request::{parse_request, UserId};
use crate::validation::validate_request;

// =============================================================================
// Order Summary
// =============================================================================

/// The priced order returned to the caller.
///
/// Monetary fields are whole currency units. `order_id` is derived, not
/// unique: a caller that needs uniqueness must layer it on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Derived identifier, `"{user_id}-{items_count}-X"`.
    pub order_id: String,

    /// The shopper identifier, echoed back untouched.
    pub user_id: UserId,

    /// Resolved currency code.
    pub currency: String,

    /// Pre-discount sum of line totals.
    pub subtotal: i64,

    /// Amount taken off the subtotal.
    pub discount: i64,

    /// Tax on the discounted amount.
    pub tax: i64,

    /// Discounted amount plus tax.
    pub total: i64,

    /// Number of line items in the request.
    pub items_count: usize,
}

// =============================================================================
// Order Id
// =============================================================================

/// Derives a human-readable order id.
///
/// Deterministic string formatting with no collision detection. Two
/// requests from the same shopper with the same item count share an id.
pub fn generate_order_id(user_id: &UserId, items_count: usize) -> String {
    format!("{user_id}-{items_count}-X")
}

// =============================================================================
// Orchestrator
// =============================================================================

/// Processes a checkout request with the built-in pricing parameters.
pub fn process_checkout(request: &Value) -> CheckoutResult<OrderSummary> {
    process_checkout_with_config(request, &CheckoutConfig::default())
}

/// Processes a checkout request against an explicit configuration.
pub fn process_checkout_with_config(
    request: &Value,
    config: &CheckoutConfig,
) -> CheckoutResult<OrderSummary> {
    let raw = parse_request(request);
    let valid = validate_request(&raw, config)?;

    let subtotal = calculate_subtotal(&valid.items);
    let coupon = Coupon::from_request(raw.coupon.as_ref())?;
    let discount = calculate_discount(coupon, subtotal, config);
    let totals = calculate_totals(subtotal, discount, config);

    let items_count = valid.items.len();
    let order_id = generate_order_id(&valid.user_id, items_count);

    Ok(OrderSummary {
        order_id,
        user_id: valid.user_id,
        currency: valid.currency,
        subtotal: totals.subtotal,
        discount: totals.discount,
        tax: totals.tax,
        total: totals.total,
        items_count,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
