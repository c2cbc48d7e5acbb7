//! # prism-core: Pure Pricing Logic for the Prism Kiosk
//!
//! This crate is the **heart** of the Prism photo-printing kiosk. It contains
//! the order calculator as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Prism Kiosk Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (WebView)                           │   │
//! │  │    Photo Picker ──► Cart View ──► Checkout ──► Confirmation    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ shell IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Kiosk Commands (apps/kiosk)                  │   │
//! │  │    get_cart, update_cart_item, review_order, place_order       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ prism-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │   order   │  │   │
//! │  │   │ CartItem  │  │   Money   │  │ line_total│  │OrderRecord│  │   │
//! │  │   │ PrintSize │  │  TaxCalc  │  │ summarize │  │ sessions  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO HIDDEN RNG • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 prism-store (Persistence Layer)                 │   │
//! │  │          SQLite key-value store, ordered-sessions ledger        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (PrintSize, CartItem, OrderSummary, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - The order calculator (line totals, cart summary)
//! - [`order`] - Order numbers, session derivation, ledger merging
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Injected Entropy**: Order numbers come from an [`order::OrderNumberSource`],
//!    never from a hardcoded RNG call inside a calculation
//!
//! ## Example Usage
//!
//! ```rust
//! use prism_core::money::Money;
//! use prism_core::types::TaxRate;
//!
//! // Create money from cents (never from floats!)
//! let subtotal = Money::from_cents(800); // $8.00
//!
//! // Tax at 8.25%, rounded half away from zero to whole cents
//! let rate = TaxRate::from_bps(825);
//! let tax = subtotal.calculate_tax(rate);
//!
//! // $8.00 × 8.25% = $0.66
//! assert_eq!(tax.cents(), 66);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod order;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use prism_core::Money` instead of
// `use prism_core::money::Money`

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use order::{OrderNumber, OrderNumberSource};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default sales tax rate in basis points (8.25%).
///
/// ## Why a constant?
/// The kiosk ships single-jurisdiction; the rate is configurable through the
/// app config layer, and this value is the fallback when nothing overrides it.
pub const DEFAULT_TAX_RATE_BPS: u32 = 825;

/// Flat shipping fee in cents ($5.99), charged once per non-empty order.
///
/// ## Business Reason
/// Print orders ship in a single envelope regardless of item count, so the
/// fee does not scale with the cart.
pub const SHIPPING_FEE_CENTS: i64 = 599;

/// Smallest order number the kiosk will issue.
pub const ORDER_NUMBER_MIN: u32 = 100_000;

/// Largest order number the kiosk will issue.
pub const ORDER_NUMBER_MAX: u32 = 999_999;

/// Maximum items allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable order sizes.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single print in the cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
