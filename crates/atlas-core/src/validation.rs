//! # Validation Module
//!
//! Request validation for the checkout pipeline.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Rules (in order)                        │
//! │                                                                         │
//! │  1. user_id present            → "user_id is required"                 │
//! │  2. items present              → "items is required"                   │
//! │  3. items is a list            → "items must be a list"                │
//! │  4. items non-empty            → "items must not be empty"             │
//! │  5. item has price and qty     → "item must have price and qty"        │
//! │  6. price > 0                  → "price must be positive"              │
//! │  7. qty > 0                    → "qty must be positive"                │
//! │                                                                         │
//! │  Fail-fast: the first violated rule wins. Items are scanned in        │
//! │  order and rules 5-7 apply per item before moving to the next one.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Currency is resolved here as well because it is the one field with a
//! default rather than a failure: an absent currency becomes the configured
//! default, a present one passes through untouched (no ISO-4217 check, no
//! normalization).

use serde_json::Value;

use crate::config::CheckoutConfig;
use crate::error::{CheckoutError, CheckoutResult};
use crate::request::{LineItem, RawCheckoutRequest, UserId};

// =============================================================================
// Validated Request
// =============================================================================

/// A checkout request that passed every validation rule.
///
/// From here on the pipeline works with typed data only; the untyped
/// `serde_json::Value` world ends at this boundary.
#[derive(Debug, Clone)]
pub struct ValidRequest {
    /// The shopper identifier, kept opaque.
    pub user_id: UserId,

    /// At least one well-formed line item, in request order.
    pub items: Vec<LineItem>,

    /// The resolved currency code.
    pub currency: String,
}

// =============================================================================
// Validation
// =============================================================================

/// Validates the raw request fields and resolves the currency.
///
/// Returns the first violated rule as a [`CheckoutError`]; later violations
/// are not collected.
pub fn validate_request(
    raw: &RawCheckoutRequest,
    config: &CheckoutConfig,
) -> CheckoutResult<ValidRequest> {
    let user_id = raw.user_id.as_ref().ok_or_else(|| CheckoutError::MissingField {
        field: "user_id".to_string(),
    })?;

    let items_value = raw.items.as_ref().ok_or_else(|| CheckoutError::MissingField {
        field: "items".to_string(),
    })?;

    let elements = items_value.as_array().ok_or(CheckoutError::ItemsNotAList)?;
    if elements.is_empty() {
        return Err(CheckoutError::EmptyItems);
    }

    let mut items = Vec::with_capacity(elements.len());
    for element in elements {
        let item: LineItem =
            serde_json::from_value(element.clone()).map_err(|_| CheckoutError::MalformedItem)?;

        if item.price <= 0.0 {
            return Err(CheckoutError::NonPositivePrice);
        }
        if item.qty <= 0 {
            return Err(CheckoutError::NonPositiveQty);
        }

        items.push(item);
    }

    Ok(ValidRequest {
        user_id: UserId::from_value(user_id),
        items,
        currency: resolve_currency(raw.currency.as_ref(), config),
    })
}

/// Resolves the request currency against the configured default.
///
/// Present values pass through verbatim. Non-string values are carried via
/// their JSON rendering; whether they denote a real currency is the
/// caller's problem, as is any ISO-4217 concern.
fn resolve_currency(currency: Option<&Value>, config: &CheckoutConfig) -> String {
    match currency {
        None => config.default_currency.clone(),
        Some(Value::String(code)) => code.clone(),
        Some(other) => other.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
