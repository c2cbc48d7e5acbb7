//! # Order Module
//!
//! Order numbers, session derivation, and ledger merging.
//!
//! ## Placement Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Order Placement (pure part)                        │
//! │                                                                         │
//! │  Cart items                                                            │
//! │       │                                                                 │
//! │       ├──► session_ids(items) ──► {"sess42", "sess43"}                 │
//! │       │                                                                 │
//! │       ├──► OrderNumber::generate(source) ──► 6-digit number            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderRecord { order_number, order_date, session_ids }                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  merge_ordered_sessions(persisted, items) ──► updated set             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  (caller hands the set to the ordered-sessions ledger to persist)      │
//! │                                                                         │
//! │  No storage or navigation happens here. Side effects belong to the     │
//! │  kiosk service layer.                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Injected Entropy
//! Order numbers are random but the randomness is a collaborator, not a
//! hardcoded call: [`OrderNumber::generate`] draws from any
//! [`OrderNumberSource`]. Production wires a thread-rng source in the app
//! layer; tests use [`SequenceSource`] for exact assertions.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use ts_rs::TS;

use crate::types::{CartItem, OrderRecord};
use crate::{ORDER_NUMBER_MAX, ORDER_NUMBER_MIN};

// =============================================================================
// Order Number Source
// =============================================================================

/// Supplier of raw entropy for order-number generation.
///
/// Implementations only need to hand back u64s; range mapping is owned by
/// [`OrderNumber::generate`] so every source yields in-contract numbers.
pub trait OrderNumberSource {
    /// Returns the next raw random value.
    fn next_u64(&mut self) -> u64;
}

/// Deterministic source replaying a fixed sequence. For tests.
///
/// Cycles when exhausted so a short sequence can feed many draws.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<u64>,
    cursor: usize,
}

impl SequenceSource {
    /// Creates a source replaying `values` in order, cycling at the end.
    pub fn new(values: Vec<u64>) -> Self {
        SequenceSource { values, cursor: 0 }
    }
}

impl OrderNumberSource for SequenceSource {
    fn next_u64(&mut self) -> u64 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

// =============================================================================
// Order Number
// =============================================================================

/// A six-digit order number in [100000, 999999].
///
/// Not globally unique: the kiosk prints it on the confirmation screen for
/// the customer to quote at pickup, and the span is wide enough that
/// same-day collisions are not a practical concern.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct OrderNumber(u32);

impl OrderNumber {
    /// Draws a fresh order number from `source`, uniform over the contract
    /// range.
    ///
    /// ## Example
    /// ```rust
    /// use prism_core::order::{OrderNumber, SequenceSource};
    ///
    /// let mut source = SequenceSource::new(vec![0]);
    /// let number = OrderNumber::generate(&mut source);
    /// assert_eq!(number.value(), 100000);
    /// ```
    pub fn generate(source: &mut dyn OrderNumberSource) -> Self {
        let span = (ORDER_NUMBER_MAX - ORDER_NUMBER_MIN + 1) as u64;
        let offset = (source.next_u64() % span) as u32;
        OrderNumber(ORDER_NUMBER_MIN + offset)
    }

    /// Returns the numeric value.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Session Derivation & Ledger Merging
// =============================================================================

/// Collects the distinct session ids across `items`.
///
/// Each item contributes the prefix of its id before the first hyphen
/// (see [`CartItem::session_id`]).
pub fn session_ids(items: &[CartItem]) -> BTreeSet<String> {
    items
        .iter()
        .map(|item| item.session_id().to_string())
        .collect()
}

/// Merges the sessions of `items` into an already-persisted session set.
///
/// Pure set union: deduplicated, order-irrelevant, idempotent. The caller
/// persists the returned set through the ordered-sessions ledger.
///
/// ## Example
/// ```rust
/// use std::collections::BTreeSet;
/// use prism_core::order::merge_ordered_sessions;
///
/// let persisted: BTreeSet<String> = ["sess41".to_string()].into();
/// let merged = merge_ordered_sessions(&persisted, &[]);
/// assert!(merged.contains("sess41"));
/// ```
pub fn merge_ordered_sessions(
    persisted: &BTreeSet<String>,
    items: &[CartItem],
) -> BTreeSet<String> {
    let mut merged = persisted.clone();
    merged.extend(session_ids(items));
    merged
}

impl OrderRecord {
    /// Builds the ephemeral record for an order being placed now.
    ///
    /// Drawn ONCE per placement; re-rendering the checkout view does not
    /// mint a new number.
    pub fn generate(items: &[CartItem], source: &mut dyn OrderNumberSource) -> Self {
        OrderRecord {
            order_number: OrderNumber::generate(source),
            order_date: Utc::now(),
            session_ids: session_ids(items),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrintSize;

    fn item(id: &str) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: "Photo".to_string(),
            thumbnail: "photo.jpg".to_string(),
            edit_info: None,
            print_sizes: vec![PrintSize::new("4x6", 299)],
            selected_size: "4x6".to_string(),
            quantity: 1,
        }
    }

    #[test]
    fn test_order_number_range_boundaries() {
        // Raw value 0 maps to the smallest number, span-1 to the largest
        let mut low = SequenceSource::new(vec![0]);
        assert_eq!(OrderNumber::generate(&mut low).value(), 100_000);

        let mut high = SequenceSource::new(vec![899_999]);
        assert_eq!(OrderNumber::generate(&mut high).value(), 999_999);

        // Wrap-around stays in range
        let mut wrap = SequenceSource::new(vec![900_000, u64::MAX]);
        assert_eq!(OrderNumber::generate(&mut wrap).value(), 100_000);
        let n = OrderNumber::generate(&mut wrap).value();
        assert!((100_000..=999_999).contains(&n));
    }

    #[test]
    fn test_order_number_always_six_digits() {
        let mut source = SequenceSource::new(vec![7, 123_456_789, 42, u64::MAX / 3]);
        for _ in 0..16 {
            let n = OrderNumber::generate(&mut source).value();
            assert!((100_000..=999_999).contains(&n), "out of range: {n}");
        }
    }

    #[test]
    fn test_session_ids_distinct() {
        let items = vec![item("sess42-1"), item("sess42-2"), item("sess43-1")];
        let sessions = session_ids(&items);
        assert_eq!(sessions.len(), 2);
        assert!(sessions.contains("sess42"));
        assert!(sessions.contains("sess43"));
    }

    #[test]
    fn test_merge_is_union() {
        let persisted: BTreeSet<String> = ["sess40".to_string(), "sess42".to_string()].into();
        let items = vec![item("sess42-1"), item("sess44-1")];

        let merged = merge_ordered_sessions(&persisted, &items);
        let expected: BTreeSet<String> = [
            "sess40".to_string(),
            "sess42".to_string(),
            "sess44".to_string(),
        ]
        .into();
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let items = vec![item("sess42-1"), item("sess43-1")];
        let once = merge_ordered_sessions(&BTreeSet::new(), &items);
        let twice = merge_ordered_sessions(&once, &items);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_order_record_generate() {
        let items = vec![item("sess42-1")];
        let mut source = SequenceSource::new(vec![41_999]);

        let record = OrderRecord::generate(&items, &mut source);
        assert_eq!(record.order_number.value(), 141_999);
        assert_eq!(record.session_ids, session_ids(&items));
    }
}
