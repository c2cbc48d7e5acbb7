//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Placed  │       │
//! │  │  Cart    │     │          │     │  Review  │     │  Order   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       place_order                        │
//! │                   update_item       (order.rs)                         │
//! │                   remove_item                                           │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{Cart, CartItemPatch, CartState, CartTotals, ConfigState, NewPrint};
use prism_core::types::CartItem;

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl CartResponse {
    fn build(cart: &Cart, config: &ConfigState) -> Self {
        let summary = cart.summary(config.tax_rate(), config.shipping_fee());
        CartResponse {
            items: cart.items.clone(),
            totals: CartTotals::new(cart, summary),
        }
    }
}

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart Display (the kiosk checkout screen)                              │
/// │                                                                         │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  YOUR PRINTS                                        2 photos   │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Beach sunset      5x7  x2              $8.00                │    │
/// │  │  Birthday cake     4x6  x1              $2.99                │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Subtotal                               $10.99               │    │
/// │  │  Tax (8.25%)                            $0.91                │    │
/// │  │  Shipping                               $5.99                │    │
/// │  │  ──────────────────────────────────────────────────          │    │
/// │  │  TOTAL                                  $17.89               │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                                                                         │
/// │  invoke('get_cart') → { items: [...], totals: {...} }                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Returns
/// Current cart with items and calculated totals
pub fn get_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::build(c, config))
}

/// Adds a picked photo to the cart.
///
/// ## Behavior
/// - The cart mints the item id (`"<session>-<suffix>"`)
/// - The requested size label must be one the photo offers
///
/// ## Returns
/// Updated cart with all items and totals
pub fn add_to_cart(
    cart: &CartState,
    config: &ConfigState,
    print: NewPrint,
) -> Result<CartResponse, ApiError> {
    debug!(session_id = %print.session_id, quantity = %print.quantity, "add_to_cart command");

    cart.with_cart_mut(|c| {
        c.add_item(print)?;
        Ok::<CartResponse, ApiError>(CartResponse::build(c, config))
    })
}

/// Applies a partial update (size and/or quantity) to a cart item.
///
/// ## Arguments
/// * `item_id` - Item id in the cart
/// * `patch` - Fields to change; omitted fields stay as they are
///
/// ## Returns
/// Updated cart
pub fn update_cart_item(
    cart: &CartState,
    config: &ConfigState,
    item_id: String,
    patch: CartItemPatch,
) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, "update_cart_item command");

    cart.with_cart_mut(|c| {
        c.update_item(&item_id, patch)?;
        Ok::<CartResponse, ApiError>(CartResponse::build(c, config))
    })
}

/// Steps an item's quantity up or down, clamping at 1.
///
/// ## Behavior
/// The − stepper at quantity 1 leaves the quantity at 1; items leave the
/// cart only through an explicit remove.
///
/// ## Returns
/// Updated cart
pub fn adjust_quantity(
    cart: &CartState,
    config: &ConfigState,
    item_id: String,
    delta: i64,
) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, delta = %delta, "adjust_quantity command");

    cart.with_cart_mut(|c| {
        c.adjust_quantity(&item_id, delta)?;
        Ok::<CartResponse, ApiError>(CartResponse::build(c, config))
    })
}

/// Removes an item from the cart.
///
/// ## Arguments
/// * `item_id` - Item id to remove
///
/// ## Returns
/// Updated cart
pub fn remove_from_cart(
    cart: &CartState,
    config: &ConfigState,
    item_id: String,
) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove_item(&item_id)?;
        Ok::<CartResponse, ApiError>(CartResponse::build(c, config))
    })
}

/// Clears all items from the cart.
///
/// ## When Used
/// - Customer abandons the session
/// - After an order is placed (place_order clears internally)
///
/// ## Returns
/// Empty cart
pub fn clear_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::build(c, config)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::types::PrintSize;

    fn new_print(session: &str, selected: &str, quantity: i64) -> NewPrint {
        NewPrint {
            session_id: session.to_string(),
            name: "Beach sunset".to_string(),
            thumbnail: "beach.jpg".to_string(),
            edit_info: None,
            print_sizes: vec![PrintSize::new("4x6", 299), PrintSize::new("5x7", 400)],
            selected_size: selected.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_get_cart_empty() {
        let cart = CartState::new();
        let config = ConfigState::default();

        let response = get_cart(&cart, &config);
        assert!(response.items.is_empty());
        assert_eq!(response.totals.total_cents, 0);
        assert_eq!(response.totals.shipping_cents, 0);
    }

    #[test]
    fn test_add_to_cart_returns_updated_totals() {
        let cart = CartState::new();
        let config = ConfigState::default();

        let response = add_to_cart(&cart, &config, new_print("sess42", "5x7", 2)).unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.totals.subtotal_cents, 800);
        assert_eq!(response.totals.tax_cents, 66);
        assert_eq!(response.totals.shipping_cents, 599);
        assert_eq!(response.totals.total_cents, 1465);
    }

    #[test]
    fn test_update_cart_item_reprices() {
        let cart = CartState::new();
        let config = ConfigState::default();

        let added = add_to_cart(&cart, &config, new_print("sess42", "5x7", 2)).unwrap();
        let id = added.items[0].id.clone();

        let response = update_cart_item(
            &cart,
            &config,
            id,
            CartItemPatch {
                selected_size: Some("4x6".to_string()),
                quantity: Some(1),
            },
        )
        .unwrap();

        assert_eq!(response.totals.subtotal_cents, 299);
    }

    #[test]
    fn test_adjust_quantity_clamps() {
        let cart = CartState::new();
        let config = ConfigState::default();

        let added = add_to_cart(&cart, &config, new_print("sess42", "5x7", 1)).unwrap();
        let id = added.items[0].id.clone();

        let response = adjust_quantity(&cart, &config, id, -3).unwrap();
        assert_eq!(response.items[0].quantity, 1);
    }

    #[test]
    fn test_remove_then_clear() {
        let cart = CartState::new();
        let config = ConfigState::default();

        let a = add_to_cart(&cart, &config, new_print("sess42", "5x7", 1)).unwrap();
        add_to_cart(&cart, &config, new_print("sess43", "4x6", 1)).unwrap();

        let removed = remove_from_cart(&cart, &config, a.items[0].id.clone()).unwrap();
        assert_eq!(removed.items.len(), 1);

        let cleared = clear_cart(&cart, &config);
        assert!(cleared.items.is_empty());
        assert_eq!(cleared.totals.total_cents, 0);
    }

    #[test]
    fn test_remove_unknown_item_is_not_found() {
        let cart = CartState::new();
        let config = ConfigState::default();

        let err = remove_from_cart(&cart, &config, "sess42-missing".to_string()).unwrap_err();
        assert_eq!(err.message, "Cart item not found: sess42-missing");
    }
}
