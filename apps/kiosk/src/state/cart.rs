//! # Cart State
//!
//! The cart store: owns the list of prints the customer has picked and every
//! mutation on it. The order calculator in `prism-core` only ever reads this
//! list.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the cart
//! 2. Only one command should modify the cart at a time
//! 3. Shell IPC handlers can run concurrently
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Frontend Action          Kiosk Command           Cart State Change     │
//! │  ───────────────          ─────────────           ─────────────────     │
//! │                                                                         │
//! │  Pick Photo ─────────────► add_to_cart() ───────► items.push(item)     │
//! │                                                                         │
//! │  Change Size/Qty ────────► update_cart_item() ──► items[i].patch       │
//! │                                                                         │
//! │  Tap +/− ────────────────► adjust_quantity() ───► qty clamped at 1     │
//! │                                                                         │
//! │  Tap Remove ─────────────► remove_from_cart() ──► items.remove(i)      │
//! │                                                                         │
//! │  Order Placed ───────────► clear_cart() ────────► items.clear()        │
//! │                                                                         │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use prism_core::error::{CoreError, CoreResult};
use prism_core::pricing;
use prism_core::types::{CartItem, OrderSummary, PrintSize, TaxRate};
use prism_core::validation;
use prism_core::Money;

/// Request to add a picked photo to the cart.
///
/// The cart mints the item id (`"<session>-<suffix>"`); callers never supply
/// one, which keeps the session prefix trustworthy for the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPrint {
    /// Session the photo came from. Must not contain a hyphen.
    pub session_id: String,

    /// Display name shown in the cart view.
    pub name: String,

    /// Thumbnail reference for the cart view.
    pub thumbnail: String,

    /// Optional description of applied edits.
    pub edit_info: Option<String>,

    /// Print-size options for this photo.
    pub print_sizes: Vec<PrintSize>,

    /// Initially chosen size label.
    pub selected_size: String,

    /// Number of prints (minimum 1).
    pub quantity: i64,
}

/// Partial update for one cart item. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemPatch {
    /// New size label; must be one the item offers.
    pub selected_size: Option<String>,

    /// New quantity; must be within [1, MAX_ITEM_QUANTITY].
    pub quantity: Option<i64>,
}

/// The cart.
///
/// ## Invariants
/// - Item ids are unique (uuid suffix on mint)
/// - Quantity is always >= 1 (decrements clamp, updates validate)
/// - `selected_size` always matches an offered label after any kiosk
///   mutation; only upstream data can introduce a mismatch
/// - Maximum items: 100; maximum quantity per item: 999
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in the cart
    pub items: Vec<CartItem>,

    /// When the cart was created/last cleared
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a picked photo to the cart, minting its item id.
    ///
    /// ## Returns
    /// A clone of the stored item (the caller usually wants the minted id).
    pub fn add_item(&mut self, print: NewPrint) -> CoreResult<CartItem> {
        validation::validate_cart_size(self.items.len())?;
        validation::validate_session_id(&print.session_id)?;
        validation::validate_photo_name(&print.name)?;
        validation::validate_print_sizes(&print.print_sizes)?;
        validation::validate_selected_size(&print.selected_size, &print.print_sizes)?;
        validation::validate_quantity(print.quantity)?;

        let item = CartItem {
            // simple() keeps the suffix hyphen-free; the FIRST hyphen in the
            // id must be the session separator
            id: format!("{}-{}", print.session_id.trim(), Uuid::new_v4().simple()),
            name: print.name,
            thumbnail: print.thumbnail,
            edit_info: print.edit_info,
            print_sizes: print.print_sizes,
            selected_size: print.selected_size,
            quantity: print.quantity,
        };

        self.items.push(item.clone());
        Ok(item)
    }

    /// Applies a partial update to an item.
    ///
    /// ## Behavior
    /// - `selected_size`: rejected unless the item offers that label
    /// - `quantity`: rejected outside [1, 999]
    /// - Unknown id: `CoreError::ItemNotFound`
    pub fn update_item(&mut self, id: &str, patch: CartItemPatch) -> CoreResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))?;

        if let Some(label) = patch.selected_size {
            validation::validate_selected_size(&label, &item.print_sizes)?;
            item.selected_size = label;
        }

        if let Some(quantity) = patch.quantity {
            validation::validate_quantity(quantity)?;
            item.quantity = quantity;
        }

        Ok(())
    }

    /// Adjusts an item's quantity by `delta`, clamping at 1.
    ///
    /// This is the +/− stepper behavior: tapping − at quantity 1 leaves the
    /// item at 1; removing it is an explicit, separate action. The upper
    /// bound clamps at the cart maximum.
    ///
    /// ## Returns
    /// The new quantity.
    pub fn adjust_quantity(&mut self, id: &str, delta: i64) -> CoreResult<i64> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))?;

        item.quantity = (item.quantity + delta).clamp(1, prism_core::MAX_ITEM_QUANTITY);
        Ok(item.quantity)
    }

    /// Removes an item from the cart by id.
    pub fn remove_item(&mut self, id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|item| item.id != id);

        if self.items.len() == initial_len {
            Err(CoreError::ItemNotFound(id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Returns the number of line items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total number of prints across all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Computes the cart totals with the given rate and fee.
    ///
    /// Pure delegation to the order calculator; recomputed on every call.
    pub fn summary(&self, tax_rate: TaxRate, shipping_fee: Money) -> OrderSummary {
        pricing::summarize(&self.items, tax_rate, shipping_fee)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

/// Cart totals summary for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub shipping_cents: i64,
    pub total_cents: i64,
}

impl CartTotals {
    /// Builds totals from a cart and its computed summary.
    pub fn new(cart: &Cart, summary: OrderSummary) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: summary.subtotal_cents,
            tax_cents: summary.tax_cents,
            shipping_cents: summary.shipping_cents,
            total_cents: summary.total_cents,
        }
    }
}

/// Shared cart state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Cart>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures only one thread modifies the cart at a time
///
/// ## Why Not RwLock?
/// Cart operations are quick, and most operations modify state.
/// A RwLock would add complexity with minimal benefit.
#[derive(Debug, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = cart_state.with_cart(|cart| cart.item_count());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.remove_item(&id))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beach_print(session: &str) -> NewPrint {
        NewPrint {
            session_id: session.to_string(),
            name: "Beach sunset".to_string(),
            thumbnail: "beach.jpg".to_string(),
            edit_info: Some("Auto-enhanced".to_string()),
            print_sizes: vec![PrintSize::new("4x6", 299), PrintSize::new("5x7", 400)],
            selected_size: "5x7".to_string(),
            quantity: 2,
        }
    }

    #[test]
    fn test_cart_add_item_mints_session_prefixed_id() {
        let mut cart = Cart::new();
        let item = cart.add_item(beach_print("sess42")).unwrap();

        assert_eq!(item.session_id(), "sess42");
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_cart_add_item_rejects_hyphenated_session() {
        let mut cart = Cart::new();
        let result = cart.add_item(beach_print("sess-42"));
        assert!(result.is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_add_item_rejects_unoffered_size() {
        let mut cart = Cart::new();
        let mut print = beach_print("sess42");
        print.selected_size = "11x14".to_string();

        assert!(cart.add_item(print).is_err());
    }

    #[test]
    fn test_cart_update_item_patch() {
        let mut cart = Cart::new();
        let item = cart.add_item(beach_print("sess42")).unwrap();

        cart.update_item(
            &item.id,
            CartItemPatch {
                selected_size: Some("4x6".to_string()),
                quantity: Some(3),
            },
        )
        .unwrap();

        let updated = &cart.items[0];
        assert_eq!(updated.selected_size, "4x6");
        assert_eq!(updated.quantity, 3);
    }

    #[test]
    fn test_cart_update_rejects_unoffered_size() {
        let mut cart = Cart::new();
        let item = cart.add_item(beach_print("sess42")).unwrap();

        let result = cart.update_item(
            &item.id,
            CartItemPatch {
                selected_size: Some("11x14".to_string()),
                quantity: None,
            },
        );
        assert!(result.is_err());
        // Untouched on failure
        assert_eq!(cart.items[0].selected_size, "5x7");
    }

    #[test]
    fn test_cart_update_rejects_zero_quantity() {
        let mut cart = Cart::new();
        let item = cart.add_item(beach_print("sess42")).unwrap();

        let result = cart.update_item(
            &item.id,
            CartItemPatch {
                selected_size: None,
                quantity: Some(0),
            },
        );
        assert!(result.is_err());
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[test]
    fn test_adjust_quantity_clamps_at_one() {
        let mut cart = Cart::new();
        let mut print = beach_print("sess42");
        print.quantity = 1;
        let item = cart.add_item(print).unwrap();

        // Tapping − at quantity 1 stays at 1
        assert_eq!(cart.adjust_quantity(&item.id, -1).unwrap(), 1);
        assert_eq!(cart.adjust_quantity(&item.id, 1).unwrap(), 2);
        assert_eq!(cart.adjust_quantity(&item.id, -5).unwrap(), 1);
    }

    #[test]
    fn test_adjust_quantity_clamps_at_max() {
        let mut cart = Cart::new();
        let item = cart.add_item(beach_print("sess42")).unwrap();

        let new_qty = cart.adjust_quantity(&item.id, 10_000).unwrap();
        assert_eq!(new_qty, prism_core::MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_cart_remove_item() {
        let mut cart = Cart::new();
        let item = cart.add_item(beach_print("sess42")).unwrap();

        cart.remove_item(&item.id).unwrap();
        assert!(cart.is_empty());

        assert!(matches!(
            cart.remove_item(&item.id),
            Err(CoreError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add_item(beach_print("sess42")).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_summary_uses_calculator() {
        let mut cart = Cart::new();
        cart.add_item(beach_print("sess42")).unwrap();

        // 5x7 at $4.00 × 2: the reference fixture
        let summary = cart.summary(TaxRate::from_bps(825), Money::from_cents(599));
        assert_eq!(summary.subtotal_cents, 800);
        assert_eq!(summary.tax_cents, 66);
        assert_eq!(summary.shipping_cents, 599);
        assert_eq!(summary.total_cents, 1465);
    }

    #[test]
    fn test_cart_state_thread_access() {
        let state = CartState::new();

        state.with_cart_mut(|cart| cart.add_item(beach_print("sess42")).map(|_| ())).unwrap();
        let count = state.with_cart(|cart| cart.item_count());
        assert_eq!(count, 1);
    }
}
