//! # atlas-core: Pure Business Logic for Atlas Checkout
//!
//! This crate is the **heart** of Atlas Checkout. It prices an order from a
//! checkout request as one pure function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Atlas Checkout Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │         Consumers (HTTP edge, CLI, test harness)                │   │
//! │  │         deserialize request ──► render / transport summary     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ serde_json::Value                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ atlas-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  request  │  │validation │  │  pricing  │  │ checkout  │  │   │
//! │  │   │ projection│  │   rules   │  │ discount  │  │ pipeline  │  │   │
//! │  │   │  UserId   │  │  currency │  │ tax/total │  │ OrderSummary│ │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`request`] - Request projection and typed records (LineItem, UserId)
//! - [`validation`] - Fail-fast rules and currency resolution
//! - [`pricing`] - Coupon policies, subtotal, discount, tax, total
//! - [`checkout`] - The orchestrator and the OrderSummary DTO
//! - [`config`] - Immutable pricing parameters
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Typed Boundaries**: The untyped request world ends at validation;
//!    everything downstream works on typed records
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **Truncation**: Fractional amounts are cut toward zero at the output
//!    boundary, never rounded
//!
//! ## Example Usage
//!
//! ```rust
//! use atlas_core::process_checkout;
//! use serde_json::json;
//!
//! let request = json!({
//!     "user_id": "u1",
//!     "items": [{"price": 100, "qty": 1}, {"price": 50, "qty": 2}],
//!     "coupon": "SAVE10",
//! });
//!
//! let summary = process_checkout(&request).unwrap();
//! assert_eq!(summary.order_id, "u1-2-X");
//! assert_eq!(summary.subtotal, 200);
//! assert_eq!(summary.discount, 20);
//! assert_eq!(summary.tax, 37);
//! assert_eq!(summary.total, 217);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod config;
pub mod error;
pub mod pricing;
pub mod request;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use atlas_core::OrderSummary` instead of
// `use atlas_core::checkout::OrderSummary`

pub use checkout::{generate_order_id, process_checkout, process_checkout_with_config, OrderSummary};
pub use config::CheckoutConfig;
pub use error::{CheckoutError, CheckoutResult};
pub use pricing::Coupon;
pub use request::{LineItem, UserId};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat tax rate applied to the discounted subtotal (21%).
///
/// ## Why a constant?
/// Pricing parameters are compiled in, not runtime configuration. Tests that
/// need different rates build a [`CheckoutConfig`] instead of mutating
/// process-wide state.
pub const TAX_RATE: f64 = 0.21;

/// Currency assigned when the request does not name one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// `SAVE10`: fraction of the subtotal taken off.
pub const SAVE10_DISCOUNT_RATE: f64 = 0.10;

/// `SAVE20`: rate at or above [`SAVE20_THRESHOLD`].
pub const SAVE20_FULL_RATE: f64 = 0.20;

/// `SAVE20`: rate below [`SAVE20_THRESHOLD`].
pub const SAVE20_MIN_RATE: f64 = 0.05;

/// `SAVE20`: subtotal (currency units) at which the full rate kicks in.
pub const SAVE20_THRESHOLD: f64 = 200.0;

/// `VIP`: flat amount off at or above [`VIP_THRESHOLD`].
pub const VIP_FULL_DISCOUNT: i64 = 50;

/// `VIP`: flat amount off below [`VIP_THRESHOLD`].
pub const VIP_MIN_DISCOUNT: i64 = 10;

/// `VIP`: subtotal (currency units) at which the full amount kicks in.
pub const VIP_THRESHOLD: f64 = 100.0;
