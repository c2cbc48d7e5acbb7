//! # Validation Module
//!
//! Input validation utilities for the Prism kiosk.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (WebView)                                           │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Kiosk Command (Rust)                                         │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: Cart contract validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Calculator (prism-core::pricing)                             │
//! │  └── Total over its inputs; degraded data prices at zero               │
//! │                                                                         │
//! │  Defense in depth: the calculator never fails, so everything that      │
//! │  SHOULD fail must be rejected here at the cart boundary.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::PrintSize;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a session id.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 64 characters
/// - Must not contain a hyphen: item ids are `"<session>-<suffix>"` and the
///   ledger recovers the session as the prefix before the FIRST hyphen, so a
///   hyphenated session id would be truncated on recovery
///
/// ## Example
/// ```rust
/// use prism_core::validation::validate_session_id;
///
/// assert!(validate_session_id("sess42").is_ok());
/// assert!(validate_session_id("sess-42").is_err());
/// assert!(validate_session_id("").is_err());
/// ```
pub fn validate_session_id(session_id: &str) -> ValidationResult<()> {
    let session_id = session_id.trim();

    if session_id.is_empty() {
        return Err(ValidationError::Required {
            field: "session_id".to_string(),
        });
    }

    if session_id.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "session_id".to_string(),
            max: 64,
        });
    }

    if session_id.contains('-') {
        return Err(ValidationError::InvalidFormat {
            field: "session_id".to_string(),
            reason: "must not contain a hyphen (reserved as the id separator)".to_string(),
        });
    }

    Ok(())
}

/// Validates a photo display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_photo_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates that a selected size label is one the item actually offers.
///
/// ## Rules
/// - Must match exactly one entry in `offered`
///
/// This guards the cart boundary so the zero-price fallback in the
/// calculator can only be triggered by inconsistent upstream data, never by
/// a kiosk mutation.
pub fn validate_selected_size(label: &str, offered: &[PrintSize]) -> ValidationResult<()> {
    if label.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "selected_size".to_string(),
        });
    }

    if !offered.iter().any(|size| size.label == label) {
        return Err(ValidationError::NotAllowed {
            field: "selected_size".to_string(),
            allowed: offered.iter().map(|size| size.label.clone()).collect(),
        });
    }

    Ok(())
}

/// Validates a print-size list.
///
/// ## Rules
/// - Labels must be unique within the list
/// - Prices must be non-negative (zero is allowed: promotional prints)
pub fn validate_print_sizes(sizes: &[PrintSize]) -> ValidationResult<()> {
    for (index, size) in sizes.iter().enumerate() {
        if sizes[..index].iter().any(|prior| prior.label == size.label) {
            return Err(ValidationError::Duplicate {
                field: "print_sizes".to_string(),
                value: size.label.clone(),
            });
        }
        validate_price_cents(size.price_cents)?;
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0); the cart clamps decrements at 1 instead of
///   passing 0 here
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free/promotional prints)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates cart size (number of line items).
///
/// ## Rules
/// - Must not exceed MAX_CART_ITEMS (100)
pub fn validate_cart_size(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_CART_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: 0,
            max: MAX_CART_ITEMS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_session_id() {
        assert!(validate_session_id("sess42").is_ok());
        assert!(validate_session_id("a1b2c3").is_ok());

        assert!(validate_session_id("").is_err());
        assert!(validate_session_id("   ").is_err());
        assert!(validate_session_id("sess-42").is_err());
        assert!(validate_session_id(&"a".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_photo_name() {
        assert!(validate_photo_name("Beach sunset").is_ok());
        assert!(validate_photo_name("").is_err());
        assert!(validate_photo_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_selected_size() {
        let offered = vec![PrintSize::new("4x6", 299), PrintSize::new("5x7", 400)];

        assert!(validate_selected_size("5x7", &offered).is_ok());
        assert!(validate_selected_size("11x14", &offered).is_err());
        assert!(validate_selected_size("", &offered).is_err());
    }

    #[test]
    fn test_validate_print_sizes() {
        let unique = vec![PrintSize::new("4x6", 299), PrintSize::new("5x7", 400)];
        assert!(validate_print_sizes(&unique).is_ok());

        let duplicated = vec![PrintSize::new("4x6", 299), PrintSize::new("4x6", 400)];
        assert!(validate_print_sizes(&duplicated).is_err());

        let negative = vec![PrintSize::new("4x6", -1)];
        assert!(validate_print_sizes(&negative).is_err());

        let free = vec![PrintSize::new("4x6", 0)];
        assert!(validate_print_sizes(&free).is_ok());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(400).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(825).is_ok());
        assert!(validate_tax_rate_bps(10000).is_ok());
        assert!(validate_tax_rate_bps(10001).is_err());
    }

    #[test]
    fn test_validate_cart_size() {
        assert!(validate_cart_size(0).is_ok());
        assert!(validate_cart_size(99).is_ok());
        assert!(validate_cart_size(100).is_err());
    }
}
