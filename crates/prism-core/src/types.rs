//! # Domain Types
//!
//! Core domain types used throughout the Prism kiosk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    CartItem     │   │  OrderSummary   │   │   OrderRecord   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (sess-sfx)  │   │  subtotal_cents │   │  order_number   │       │
//! │  │  print_sizes    │   │  tax_cents      │   │  order_date     │       │
//! │  │  selected_size  │   │  shipping_cents │   │  session_ids    │       │
//! │  │  quantity       │   │  total_cents    │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    PrintSize    │   │    TaxRate      │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  label ("5x7")  │   │  bps (u32)      │                             │
//! │  │  price_cents    │   │  825 = 8.25%    │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Item Identity
//! Every cart item id is `"<sessionId>-<suffix>"`. The session id is the
//! prefix before the FIRST hyphen; it groups all prints picked during one
//! customer interaction and is what the ordered-sessions ledger records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 825 bps = 8.25% (e.g., Texas sales tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::from_bps(crate::DEFAULT_TAX_RATE_BPS)
    }
}

// =============================================================================
// Print Size
// =============================================================================

/// One print-size option offered for a photo.
///
/// Labels are unique within an item's `print_sizes` list, so a matching
/// label uniquely determines a price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PrintSize {
    /// Display label, e.g. "4x6", "5x7", "8x10".
    pub label: String,

    /// Price per print in cents.
    pub price_cents: i64,
}

impl PrintSize {
    /// Creates a print size option.
    pub fn new(label: impl Into<String>, price_cents: i64) -> Self {
        PrintSize {
            label: label.into(),
            price_cents,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// A photo selected for printing.
///
/// ## Ownership
/// Instances are owned by the cart store in the app layer; the order
/// calculator only reads them, never mutates.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    /// Item id, `"<sessionId>-<suffix>"`. The session prefix is recoverable
    /// via [`CartItem::session_id`].
    pub id: String,

    /// Display name shown in the cart view.
    pub name: String,

    /// Thumbnail reference for the cart view (display-only).
    pub thumbnail: String,

    /// Optional description of applied edits (display-only).
    pub edit_info: Option<String>,

    /// Print-size options for this photo. Labels unique within the list.
    pub print_sizes: Vec<PrintSize>,

    /// Chosen size label; expected to match one `print_sizes` entry.
    pub selected_size: String,

    /// Number of prints. Minimum 1; the cart store clamps decrements.
    pub quantity: i64,
}

impl CartItem {
    /// Returns the session id: the prefix of `id` before the first hyphen.
    ///
    /// An id with no hyphen is its own session id.
    ///
    /// ## Example
    /// ```rust
    /// use prism_core::types::CartItem;
    ///
    /// let item = CartItem {
    ///     id: "sess42-photo-1".to_string(),
    ///     name: "Beach".to_string(),
    ///     thumbnail: "beach.jpg".to_string(),
    ///     edit_info: None,
    ///     print_sizes: vec![],
    ///     selected_size: "4x6".to_string(),
    ///     quantity: 1,
    /// };
    /// assert_eq!(item.session_id(), "sess42");
    /// ```
    pub fn session_id(&self) -> &str {
        self.id.split('-').next().unwrap_or(&self.id)
    }

    /// Finds the print-size entry matching `selected_size`, if any.
    ///
    /// `None` means the item carries a size label it does not offer - the
    /// data inconsistency the pricing layer degrades to a zero price.
    pub fn selected_print_size(&self) -> Option<&PrintSize> {
        self.print_sizes
            .iter()
            .find(|size| size.label == self.selected_size)
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// Derived cart totals. Recomputed on every read, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderSummary {
    /// Sum of line totals (price × quantity) in cents.
    pub subtotal_cents: i64,

    /// Tax on the subtotal, rounded half away from zero to cents.
    pub tax_cents: i64,

    /// Flat shipping fee; zero for an empty cart.
    pub shipping_cents: i64,

    /// subtotal + tax + shipping.
    pub total_cents: i64,
}

impl OrderSummary {
    /// Summary of an empty cart: all zeros, including shipping.
    pub const fn empty() -> Self {
        OrderSummary {
            subtotal_cents: 0,
            tax_cents: 0,
            shipping_cents: 0,
            total_cents: 0,
        }
    }

    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Returns the tax as Money.
    #[inline]
    pub fn tax(&self) -> Money {
        Money::from_cents(self.tax_cents)
    }

    /// Returns the shipping fee as Money.
    #[inline]
    pub fn shipping(&self) -> Money {
        Money::from_cents(self.shipping_cents)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Order Record
// =============================================================================

/// Ephemeral record produced at order-placement time.
///
/// Only the `session_ids` component is durably persisted (by the
/// ordered-sessions ledger); the number and date exist for the confirmation
/// screen and logs.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderRecord {
    /// Six-digit order number, drawn from an injected source.
    pub order_number: crate::order::OrderNumber,

    /// Timestamp at generation time.
    #[ts(as = "String")]
    pub order_date: DateTime<Utc>,

    /// Distinct session ids across the ordered items.
    pub session_ids: BTreeSet<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: "Photo".to_string(),
            thumbnail: "photo.jpg".to_string(),
            edit_info: None,
            print_sizes: vec![PrintSize::new("4x6", 299), PrintSize::new("5x7", 400)],
            selected_size: "5x7".to_string(),
            quantity: 1,
        }
    }

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(825);
        assert_eq!(rate.bps(), 825);
        assert!((rate.percentage() - 8.25).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(8.25);
        assert_eq!(rate.bps(), 825);
    }

    #[test]
    fn test_tax_rate_default_is_kiosk_rate() {
        assert_eq!(TaxRate::default().bps(), crate::DEFAULT_TAX_RATE_BPS);
    }

    #[test]
    fn test_session_id_is_first_segment() {
        assert_eq!(item("sess42-1").session_id(), "sess42");
        // Suffixes may themselves contain hyphens
        assert_eq!(item("sess42-photo-1").session_id(), "sess42");
    }

    #[test]
    fn test_session_id_without_hyphen_is_whole_id() {
        assert_eq!(item("sess42").session_id(), "sess42");
    }

    #[test]
    fn test_selected_print_size_match() {
        let item = item("sess42-1");
        let size = item.selected_print_size().unwrap();
        assert_eq!(size.label, "5x7");
        assert_eq!(size.price().cents(), 400);
    }

    #[test]
    fn test_selected_print_size_unmatched() {
        let mut item = item("sess42-1");
        item.selected_size = "11x14".to_string();
        assert!(item.selected_print_size().is_none());
    }

    #[test]
    fn test_empty_summary_is_all_zeros() {
        let summary = OrderSummary::empty();
        assert_eq!(summary.subtotal_cents, 0);
        assert_eq!(summary.tax_cents, 0);
        assert_eq!(summary.shipping_cents, 0);
        assert_eq!(summary.total_cents, 0);
    }
}
