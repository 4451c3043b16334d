//! # Error Types
//!
//! Domain-specific error types for atlas-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  atlas-core errors (this file)                                         │
//! │  └── CheckoutError    - Invalid checkout request input                 │
//! │                                                                         │
//! │  Consumer errors (HTTP edge, CLI - separate repositories)              │
//! │  └── Map CheckoutError to status codes / exit codes                    │
//! │                                                                         │
//! │  Flow: CheckoutError → consumer error → client                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Every variant renders the exact message the client sees
//! 4. All variants mean "invalid input": nothing here is retryable
//!
//! The rendered messages are a stable contract. Consumers match on them (or
//! on the variants) to decide what to show the shopper, so changing the text
//! is a breaking change.

use thiserror::Error;

// =============================================================================
// Checkout Error
// =============================================================================

/// Errors produced while validating and pricing a checkout request.
///
/// The pipeline is fail-fast: the first violated rule is reported and
/// processing stops. No partial `OrderSummary` is ever returned alongside an
/// error, and errors are never aggregated across items or fields.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A required top-level field is missing from the request.
    ///
    /// ## When This Occurs
    /// - `user_id` absent (or JSON `null`)
    /// - `items` absent (or JSON `null`)
    #[error("{field} is required")]
    MissingField { field: String },

    /// `items` is present but is not a JSON array.
    ///
    /// A mapping, string, or number in the `items` slot is a client bug and
    /// is rejected outright rather than coerced.
    #[error("items must be a list")]
    ItemsNotAList,

    /// `items` is an array with no elements.
    #[error("items must not be empty")]
    EmptyItems,

    /// A line item is missing `price` or `qty`, or either has the wrong
    /// shape (non-numeric price, fractional qty, element not an object).
    #[error("item must have price and qty")]
    MalformedItem,

    /// A line item price is zero or negative.
    #[error("price must be positive")]
    NonPositivePrice,

    /// A line item quantity is zero or negative.
    #[error("qty must be positive")]
    NonPositiveQty,

    /// The coupon code is not one of the recognized codes.
    ///
    /// The offending code is kept for diagnostics (visible via `Debug`);
    /// the rendered message stays fixed.
    #[error("unknown coupon")]
    UnknownCoupon { code: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

// =============================================================================
// Unit Tests
// =============================================================================
