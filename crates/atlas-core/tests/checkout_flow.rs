//! End-to-end checkout pipeline tests.
//!
//! Everything here goes through the public entry point with plain JSON
//! requests, the way an HTTP edge or CLI would call the crate.

use atlas_core::{process_checkout, process_checkout_with_config, CheckoutConfig, OrderSummary};
use serde_json::{json, Value};

fn checkout(request: Value) -> OrderSummary {
    process_checkout(&request).expect("request should price successfully")
}

fn checkout_err(request: Value) -> String {
    process_checkout(&request).unwrap_err().to_string()
}

#[test]
fn save10_reference_order() {
    let summary = checkout(json!({
        "user_id": "u1",
        "items": [{"price": 100, "qty": 1}, {"price": 50, "qty": 2}],
        "coupon": "SAVE10",
    }));

    assert_eq!(summary.order_id, "u1-2-X");
    assert_eq!(summary.currency, "USD");
    assert_eq!(summary.subtotal, 200);
    assert_eq!(summary.discount, 20);
    assert_eq!(summary.tax, 37);
    assert_eq!(summary.total, 217);
    assert_eq!(summary.items_count, 2);
}

#[test]
fn vip_reference_order() {
    let summary = checkout(json!({
        "user_id": "u1",
        "items": [{"price": 100, "qty": 1}, {"price": 50, "qty": 2}],
        "coupon": "VIP",
    }));

    assert_eq!(summary.discount, 50);
    assert_eq!(summary.tax, 31);
    assert_eq!(summary.total, 181);
}

#[test]
fn reordering_items_changes_nothing_but_nothing() {
    let forward = checkout(json!({
        "user_id": "u9",
        "items": [
            {"price": 3.25, "qty": 2},
            {"price": 100, "qty": 1},
            {"price": 0.75, "qty": 7},
        ],
        "coupon": "SAVE20",
    }));
    let backward = checkout(json!({
        "user_id": "u9",
        "items": [
            {"price": 0.75, "qty": 7},
            {"price": 100, "qty": 1},
            {"price": 3.25, "qty": 2},
        ],
        "coupon": "SAVE20",
    }));

    assert_eq!(forward, backward);
}

#[test]
fn save20_threshold_is_inclusive() {
    // Exactly 200: full 20% tier.
    let at = checkout(json!({
        "user_id": "u1",
        "items": [{"price": 100, "qty": 2}],
        "coupon": "SAVE20",
    }));
    assert_eq!(at.discount, 40);
    assert_eq!(at.tax, 33);
    assert_eq!(at.total, 193);

    // Just below: 5% tier, truncated.
    let below = checkout(json!({
        "user_id": "u1",
        "items": [{"price": 199.99, "qty": 1}],
        "coupon": "SAVE20",
    }));
    assert_eq!(below.subtotal, 199);
    assert_eq!(below.discount, 9);
    assert_eq!(below.tax, 40);
    assert_eq!(below.total, 230);
}

#[test]
fn vip_threshold_is_inclusive() {
    let at = checkout(json!({
        "user_id": "u1",
        "items": [{"price": 50, "qty": 2}],
        "coupon": "VIP",
    }));
    assert_eq!(at.discount, 50);
    assert_eq!(at.total, 60);

    let below = checkout(json!({
        "user_id": "u1",
        "items": [{"price": 99, "qty": 1}],
        "coupon": "VIP",
    }));
    assert_eq!(below.discount, 10);
    assert_eq!(below.tax, 18);
    assert_eq!(below.total, 107);
}

#[test]
fn absent_and_empty_coupon_mean_no_discount() {
    let absent = checkout(json!({
        "user_id": "u1",
        "items": [{"price": 40, "qty": 1}],
    }));
    assert_eq!(absent.discount, 0);
    assert_eq!(absent.total, 48);

    let empty = checkout(json!({
        "user_id": "u1",
        "items": [{"price": 40, "qty": 1}],
        "coupon": "",
    }));
    assert_eq!(empty, absent);
}

#[test]
fn tiny_order_with_flat_coupon_clamps_at_zero() {
    // VIP under the threshold still takes 10 off, which exceeds the
    // subtotal. The clamp floors the discounted amount before tax.
    let summary = checkout(json!({
        "user_id": "u1",
        "items": [{"price": 0.75, "qty": 1}],
        "coupon": "VIP",
    }));

    assert_eq!(summary.subtotal, 0);
    assert_eq!(summary.discount, 10);
    assert_eq!(summary.tax, 0);
    assert_eq!(summary.total, 0);
}

#[test]
fn items_count_tracks_the_request() {
    for count in 1_usize..=5 {
        let items: Vec<Value> = (0..count).map(|_| json!({"price": 5, "qty": 1})).collect();
        let summary = checkout(json!({"user_id": "n", "items": items}));
        assert_eq!(summary.items_count, count);
        assert_eq!(summary.order_id, format!("n-{count}-X"));
    }
}

#[test]
fn totals_invariant_holds_across_coupons() {
    // total = max(subtotal - discount, 0) + tax, and the tax is the
    // truncated 21% of the clamped remainder.
    let coupons = [None, Some("SAVE10"), Some("SAVE20"), Some("VIP")];
    let carts = [
        vec![json!({"price": 100, "qty": 1}), json!({"price": 50, "qty": 2})],
        vec![json!({"price": 7, "qty": 3})],
        vec![json!({"price": 250, "qty": 2})],
        vec![json!({"price": 1, "qty": 1})],
    ];

    for coupon in coupons {
        for cart in &carts {
            let mut request = json!({"user_id": "grid", "items": cart});
            if let Some(code) = coupon {
                request["coupon"] = json!(code);
            }

            let summary = checkout(request);
            let after_discount = (summary.subtotal - summary.discount).max(0);
            assert_eq!(summary.total, after_discount + summary.tax);
            assert_eq!(summary.tax, (after_discount as f64 * 0.21) as i64);
        }
    }
}

#[test]
fn failures_carry_the_first_violated_rule() {
    assert_eq!(checkout_err(json!({})), "user_id is required");
    assert_eq!(checkout_err(json!({"user_id": "u1"})), "items is required");
    assert_eq!(
        checkout_err(json!({"user_id": "u1", "items": {"price": 1, "qty": 1}})),
        "items must be a list"
    );
    assert_eq!(
        checkout_err(json!({"user_id": "u1", "items": []})),
        "items must not be empty"
    );
    assert_eq!(
        checkout_err(json!({
            "user_id": "u1",
            "items": [{"price": 1, "qty": 1}],
            "coupon": "UNKNOWN",
        })),
        "unknown coupon"
    );
}

#[test]
fn custom_config_reprices_the_same_request() {
    let request = json!({
        "user_id": "u1",
        "items": [{"price": 100, "qty": 2}],
        "coupon": "SAVE20",
    });

    let mut config = CheckoutConfig::default();
    config.tax_rate = 0.0;
    config.default_currency = "EUR".to_string();

    let summary = process_checkout_with_config(&request, &config).unwrap();
    assert_eq!(summary.currency, "EUR");
    assert_eq!(summary.discount, 40);
    assert_eq!(summary.tax, 0);
    assert_eq!(summary.total, 160);

    // The stock configuration still prices it the stock way.
    let stock = process_checkout(&request).unwrap();
    assert_eq!(stock.currency, "USD");
    assert_eq!(stock.total, 193);
}
