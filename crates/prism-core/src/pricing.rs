//! # Pricing Module
//!
//! The order calculator: line-item pricing and cart totals.
//!
//! ## Calculation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Order Calculator                                   │
//! │                                                                         │
//! │  CartItem ──► line_total(item)                                         │
//! │                │                                                        │
//! │                │  selected_size found?  price × quantity               │
//! │                │  not found?            $0.00 (documented fallback)    │
//! │                ▼                                                        │
//! │  subtotal = Σ line totals                                              │
//! │                │                                                        │
//! │                ▼                                                        │
//! │  tax = subtotal × rate, rounded half away from zero to cents           │
//! │                │                                                        │
//! │                ▼                                                        │
//! │  shipping = flat fee, only when the cart is non-empty                  │
//! │                │                                                        │
//! │                ▼                                                        │
//! │  total = subtotal + tax + shipping                                     │
//! │                                                                         │
//! │  Tax is rounded BEFORE being summed into the total. Subtotals are      │
//! │  integer cents, so no later rounding step exists to disagree with it.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Zero-Price Fallback
//! An item whose `selected_size` matches none of its `print_sizes` prices at
//! zero instead of failing. The calculator stays total over its inputs; the
//! kiosk service layer is responsible for surfacing the inconsistency as a
//! warning (see `apps/kiosk` commands). Callers that want to detect the
//! condition up front use [`CartItem::selected_print_size`].

use crate::money::Money;
use crate::types::{CartItem, OrderSummary, TaxRate};

/// Computes the price contribution of a single cart item.
///
/// Resolves `selected_size` against the item's `print_sizes`; a match prices
/// at `price × quantity`, a miss prices at zero.
///
/// ## Example
/// ```rust
/// use prism_core::pricing::line_total;
/// use prism_core::types::{CartItem, PrintSize};
///
/// let item = CartItem {
///     id: "sess42-1".to_string(),
///     name: "Beach".to_string(),
///     thumbnail: "beach.jpg".to_string(),
///     edit_info: None,
///     print_sizes: vec![PrintSize::new("5x7", 400)],
///     selected_size: "5x7".to_string(),
///     quantity: 2,
/// };
/// assert_eq!(line_total(&item).cents(), 800);
/// ```
pub fn line_total(item: &CartItem) -> Money {
    match item.selected_print_size() {
        Some(size) => size.price().multiply_quantity(item.quantity),
        None => Money::zero(),
    }
}

/// Aggregates cart totals: subtotal, tax, shipping, total.
///
/// ## Arguments
/// * `items` - The cart contents (read-only)
/// * `tax_rate` - Tax rate applied to the subtotal
/// * `shipping_fee` - Flat fee charged once for any non-empty cart
///
/// ## Edge Cases
/// - Empty cart: everything is zero, including shipping
/// - Non-empty cart of zero-priced items: shipping and tax-on-zero still
///   follow the same rules (shipping applies, tax is zero)
///
/// ## Reference Fixture
/// One 5x7 at $4.00, quantity 2, default rate and fee:
/// subtotal $8.00, tax $0.66, shipping $5.99, total $14.65.
pub fn summarize(items: &[CartItem], tax_rate: TaxRate, shipping_fee: Money) -> OrderSummary {
    let subtotal: Money = items.iter().map(line_total).sum();
    let tax = subtotal.calculate_tax(tax_rate);
    let shipping = if items.is_empty() {
        Money::zero()
    } else {
        shipping_fee
    };
    let total = subtotal + tax + shipping;

    OrderSummary {
        subtotal_cents: subtotal.cents(),
        tax_cents: tax.cents(),
        shipping_cents: shipping.cents(),
        total_cents: total.cents(),
    }
}

/// [`summarize`] with the kiosk defaults (8.25% tax, $5.99 shipping).
pub fn summarize_with_defaults(items: &[CartItem]) -> OrderSummary {
    summarize(
        items,
        TaxRate::from_bps(crate::DEFAULT_TAX_RATE_BPS),
        Money::from_cents(crate::SHIPPING_FEE_CENTS),
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrintSize;

    fn item(selected: &str, quantity: i64) -> CartItem {
        CartItem {
            id: "sess42-1".to_string(),
            name: "Beach".to_string(),
            thumbnail: "beach.jpg".to_string(),
            edit_info: None,
            print_sizes: vec![
                PrintSize::new("4x6", 299),
                PrintSize::new("5x7", 400),
                PrintSize::new("8x10", 799),
            ],
            selected_size: selected.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_line_total_matched_size() {
        assert_eq!(line_total(&item("5x7", 2)).cents(), 800);
        assert_eq!(line_total(&item("4x6", 1)).cents(), 299);
        assert_eq!(line_total(&item("8x10", 3)).cents(), 2397);
    }

    #[test]
    fn test_line_total_unmatched_size_is_zero() {
        // Documented fallback: an unoffered label prices at zero rather
        // than failing. The service layer warns; the calculator stays total.
        assert_eq!(line_total(&item("11x14", 5)).cents(), 0);
    }

    #[test]
    fn test_summarize_empty_cart_is_all_zeros() {
        let summary = summarize_with_defaults(&[]);
        assert_eq!(summary, OrderSummary::empty());
    }

    #[test]
    fn test_summarize_reference_fixture() {
        // One 5x7 at $4.00 × 2:
        // subtotal $8.00, tax $0.66, shipping $5.99, total $14.65
        let summary = summarize_with_defaults(&[item("5x7", 2)]);
        assert_eq!(summary.subtotal_cents, 800);
        assert_eq!(summary.tax_cents, 66);
        assert_eq!(summary.shipping_cents, 599);
        assert_eq!(summary.total_cents, 1465);
    }

    #[test]
    fn test_summarize_shipping_is_flat() {
        // Flat $5.99 regardless of item count
        let one = summarize_with_defaults(&[item("4x6", 1)]);
        let three = summarize_with_defaults(&[item("4x6", 1), item("5x7", 2), item("8x10", 1)]);
        assert_eq!(one.shipping_cents, 599);
        assert_eq!(three.shipping_cents, 599);
    }

    #[test]
    fn test_summarize_multiple_items() {
        // 299 + 800 + 799 = 1898; tax = round(1898 × 0.0825) = round(156.585) = 157
        let summary =
            summarize_with_defaults(&[item("4x6", 1), item("5x7", 2), item("8x10", 1)]);
        assert_eq!(summary.subtotal_cents, 1898);
        assert_eq!(summary.tax_cents, 157);
        assert_eq!(summary.total_cents, 1898 + 157 + 599);
    }

    #[test]
    fn test_summarize_unmatched_items_contribute_nothing() {
        // A cart holding only an inconsistent item still counts as non-empty:
        // shipping applies even though the subtotal is zero.
        let summary = summarize_with_defaults(&[item("11x14", 5)]);
        assert_eq!(summary.subtotal_cents, 0);
        assert_eq!(summary.tax_cents, 0);
        assert_eq!(summary.shipping_cents, 599);
        assert_eq!(summary.total_cents, 599);
    }

    #[test]
    fn test_summarize_custom_rate_and_fee() {
        let summary = summarize(
            &[item("5x7", 2)],
            TaxRate::zero(),
            Money::zero(),
        );
        assert_eq!(summary.subtotal_cents, 800);
        assert_eq!(summary.tax_cents, 0);
        assert_eq!(summary.shipping_cents, 0);
        assert_eq!(summary.total_cents, 800);
    }

    #[test]
    fn test_tax_rounded_before_total() {
        // subtotal 1010¢ × 8.25% = 83.325¢ → 83¢; total uses the rounded tax
        let mut it = item("4x6", 1);
        it.print_sizes = vec![PrintSize::new("4x6", 1010)];
        let summary = summarize_with_defaults(&[it]);
        assert_eq!(summary.tax_cents, 83);
        assert_eq!(summary.total_cents, 1010 + 83 + 599);
    }
}
