//! # Request Projection
//!
//! Turns an untyped checkout request into raw fields and typed records.
//!
//! ## Projection Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Request Projection                                  │
//! │                                                                         │
//! │  serde_json::Value (whatever the edge handed us)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_request() ── pure key lookup, never fails                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RawCheckoutRequest { user_id, items, coupon, currency }               │
//! │       │              each Option<Value>, None when absent or null      │
//! │       ▼                                                                 │
//! │  validation::validate_request() ── the first place errors can occur    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The projection deliberately performs NO validation. Missing keys, wrong
//! types, and nonsense values all flow through as-is so that the validator
//! can report them in its fixed rule order.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Raw Request
// =============================================================================

/// The four raw checkout fields, straight out of the untyped request.
///
/// `None` means the key was absent or explicitly `null`. Everything else is
/// kept verbatim, including values of the wrong type.
#[derive(Debug, Clone, Default)]
pub struct RawCheckoutRequest {
    pub user_id: Option<Value>,
    pub items: Option<Value>,
    pub coupon: Option<Value>,
    pub currency: Option<Value>,
}

/// Projects the expected fields out of an untyped request.
///
/// Pure and total: any JSON value is accepted, a non-object request simply
/// projects to all-`None` (and fails validation later on the missing
/// `user_id`).
pub fn parse_request(request: &Value) -> RawCheckoutRequest {
    RawCheckoutRequest {
        user_id: field(request, "user_id"),
        items: field(request, "items"),
        coupon: field(request, "coupon"),
        currency: field(request, "currency"),
    }
}

fn field(request: &Value, key: &str) -> Option<Value> {
    match request.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.clone()),
    }
}

// =============================================================================
// User Id
// =============================================================================

/// An opaque shopper identifier.
///
/// The contract allows a string or a number and treats both as opaque: the
/// id is echoed back in the summary and interpolated into the order id, and
/// nothing else. Anything stranger than that is carried via its compact JSON
/// rendering rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Text(String),
    Number(serde_json::Number),
}

impl UserId {
    /// Wraps a raw JSON value as an opaque identifier.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => UserId::Text(s.clone()),
            Value::Number(n) => UserId::Number(n.clone()),
            other => UserId::Text(other.to_string()),
        }
    }
}

/// Renders the id the way it appears inside an order id: strings without
/// quotes, numbers as written.
impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Text(s) => f.write_str(s),
            UserId::Number(n) => write!(f, "{n}"),
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One priced line of the order.
///
/// ## Shape Rules
/// - `price`: any JSON number (positivity is a validation rule, not a shape
///   rule, so the two failures report distinct messages)
/// - `qty`: an integer; fractional quantities are a malformed item
/// - extra keys on the element are ignored
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unit price in currency units. May be fractional.
    pub price: f64,

    /// Number of units ordered.
    pub qty: i64,
}

impl LineItem {
    /// Price contribution of this line (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> f64 {
        self.price * self.qty as f64
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_request_projects_present_fields() {
        let request = json!({
            "user_id": "u1",
            "items": [{"price": 100, "qty": 1}],
            "coupon": "SAVE10",
            "currency": "EUR",
        });

        let raw = parse_request(&request);
        assert_eq!(raw.user_id, Some(json!("u1")));
        assert_eq!(raw.items, Some(json!([{"price": 100, "qty": 1}])));
        assert_eq!(raw.coupon, Some(json!("SAVE10")));
        assert_eq!(raw.currency, Some(json!("EUR")));
    }

    #[test]
    fn test_parse_request_missing_and_null_are_absent() {
        let request = json!({"user_id": null, "coupon": null});

        let raw = parse_request(&request);
        assert!(raw.user_id.is_none());
        assert!(raw.items.is_none());
        assert!(raw.coupon.is_none());
        assert!(raw.currency.is_none());
    }

    #[test]
    fn test_parse_request_never_fails_on_non_object() {
        // A non-object request projects to nothing; the validator reports
        // the missing user_id.
        let raw = parse_request(&json!("not a request"));
        assert!(raw.user_id.is_none());
        assert!(raw.items.is_none());
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId::from_value(&json!("u1")).to_string(), "u1");
        assert_eq!(UserId::from_value(&json!(42)).to_string(), "42");
        assert_eq!(UserId::from_value(&json!(true)).to_string(), "true");
    }

    #[test]
    fn test_line_item_shapes() {
        let item: LineItem = serde_json::from_value(json!({"price": 10.5, "qty": 3})).unwrap();
        assert_eq!(item.price, 10.5);
        assert_eq!(item.qty, 3);
        assert_eq!(item.line_total(), 31.5);

        // Integer prices widen to f64.
        let item: LineItem = serde_json::from_value(json!({"price": 100, "qty": 1})).unwrap();
        assert_eq!(item.price, 100.0);

        // Extra keys are ignored.
        assert!(
            serde_json::from_value::<LineItem>(json!({"price": 1, "qty": 1, "sku": "X"})).is_ok()
        );

        // Missing keys, fractional qty, and non-numeric price are malformed.
        assert!(serde_json::from_value::<LineItem>(json!({"price": 1})).is_err());
        assert!(serde_json::from_value::<LineItem>(json!({"qty": 1})).is_err());
        assert!(serde_json::from_value::<LineItem>(json!({"price": 1, "qty": 1.5})).is_err());
        assert!(serde_json::from_value::<LineItem>(json!({"price": "1", "qty": 1})).is_err());
    }
}
