//! # Checkout Commands
//!
//! Order review and placement.
//!
//! ## Placement Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       place_order                                       │
//! │                                                                         │
//! │  1. Snapshot cart ──► empty? reject                                    │
//! │  2. Warn on any item whose selected size isn't offered                 │
//! │  3. Summarize totals (prism-core)                                      │
//! │  4. Generate OrderRecord (injected number source)                      │
//! │  5. SessionLedger::record(session_ids) ──► durable write               │
//! │  6. ONLY AFTER the write succeeds:                                     │
//! │       clear the cart, navigate home                                    │
//! │  7. Return the confirmation                                            │
//! │                                                                         │
//! │  A failed ledger write propagates as ApiError and leaves the cart      │
//! │  intact - the customer can retry without re-picking photos.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::navigation::Navigator;
use crate::state::{CartState, CartTotals, ConfigState, DbState};
use prism_core::order::OrderNumberSource;
use prism_core::pricing;
use prism_core::types::{CartItem, OrderRecord};
use prism_core::CoreError;

/// One priced line on the checkout review screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub edit_info: Option<String>,
    pub selected_size: String,
    pub quantity: i64,
    /// Unit price for the selected size; `None` when the item carries a
    /// size label it does not offer (such a line totals zero).
    pub unit_price_cents: Option<i64>,
    pub line_total_cents: i64,
}

impl LineItem {
    fn from_cart_item(item: &CartItem) -> Self {
        LineItem {
            id: item.id.clone(),
            name: item.name.clone(),
            thumbnail: item.thumbnail.clone(),
            edit_info: item.edit_info.clone(),
            selected_size: item.selected_size.clone(),
            quantity: item.quantity,
            unit_price_cents: item.selected_print_size().map(|size| size.price_cents),
            line_total_cents: pricing::line_total(item).cents(),
        }
    }
}

/// Checkout review: priced lines plus totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
}

/// Confirmation returned after a successful placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    /// Six-digit number the customer quotes at pickup.
    pub order_number: u32,

    /// Placement timestamp (RFC 3339).
    pub order_date: String,

    /// Sessions this order covered.
    pub session_ids: Vec<String>,

    /// Totals as charged.
    pub totals: CartTotals,

    /// Kiosk name for the confirmation screen.
    pub kiosk_name: String,
}

/// Builds the checkout review for the current cart.
///
/// Emits a warning for every line whose selected size isn't offered; those
/// lines price at zero rather than failing (the calculator's documented
/// fallback), and the review surfaces them with a null unit price so the
/// shell can flag them.
pub fn review_order(cart: &CartState, config: &ConfigState) -> ReviewResponse {
    debug!("review_order command");

    cart.with_cart(|c| {
        let items: Vec<LineItem> = c.items.iter().map(LineItem::from_cart_item).collect();

        for item in c.items.iter().filter(|i| i.selected_print_size().is_none()) {
            warn!(
                item_id = %item.id,
                selected_size = %item.selected_size,
                "Selected size not offered by item; line priced at zero"
            );
        }

        let summary = c.summary(config.tax_rate(), config.shipping_fee());
        ReviewResponse {
            items,
            totals: CartTotals::new(c, summary),
        }
    })
}

/// Places the order: records the cart's sessions in the durable ledger,
/// clears the cart, and asks the shell to navigate home.
///
/// ## Arguments
/// * `db` - Store state (owns the ordered-sessions ledger)
/// * `cart` - Cart state; snapshot is taken under the lock
/// * `config` - Pricing configuration and the post-order route
/// * `navigator` - Navigation collaborator
/// * `source` - Order-number entropy (injected so tests stay deterministic)
///
/// ## Ordering Guarantee
/// The cart is cleared and navigation requested ONLY after the ledger write
/// succeeds. On any store failure the cart is untouched and the error
/// propagates to the shell.
pub async fn place_order(
    db: &DbState,
    cart: &CartState,
    config: &ConfigState,
    navigator: &dyn Navigator,
    source: &mut dyn OrderNumberSource,
) -> Result<OrderConfirmation, ApiError> {
    debug!("place_order command");

    let (items, totals) = cart.with_cart(|c| {
        let summary = c.summary(config.tax_rate(), config.shipping_fee());
        (c.items.clone(), CartTotals::new(c, summary))
    });

    if items.is_empty() {
        return Err(CoreError::EmptyCart.into());
    }

    for item in items.iter().filter(|i| i.selected_print_size().is_none()) {
        warn!(
            item_id = %item.id,
            selected_size = %item.selected_size,
            "Placing order with a zero-priced line (size not offered)"
        );
    }

    let record = OrderRecord::generate(&items, source);

    let merged = db
        .inner()
        .sessions()
        .record(record.session_ids.iter().cloned())
        .await?;

    // Durable write succeeded; now it is safe to drop the cart and leave
    cart.with_cart_mut(|c| c.clear());
    navigator.go_to(&config.home_route);

    info!(
        order_number = %record.order_number,
        sessions = record.session_ids.len(),
        ledger_total = merged.len(),
        total_cents = totals.total_cents,
        "Order placed"
    );

    Ok(OrderConfirmation {
        order_number: record.order_number.value(),
        order_date: record.order_date.to_rfc3339(),
        session_ids: record.session_ids.into_iter().collect(),
        totals,
        kiosk_name: config.kiosk_name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::RecordingNavigator;
    use crate::state::NewPrint;
    use prism_core::order::SequenceSource;
    use prism_core::types::PrintSize;
    use prism_store::{Store, StoreConfig};
    use std::collections::BTreeSet;

    async fn test_db() -> DbState {
        DbState::new(Store::new(StoreConfig::in_memory()).await.unwrap())
    }

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

    fn set_of(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_review_order_prices_lines() {
        let cart = CartState::new();
        let config = ConfigState::default();

        cart.with_cart_mut(|c| c.add_item(new_print("sess42", "5x7", 2)).map(|_| ()))
            .unwrap();

        let review = review_order(&cart, &config);
        assert_eq!(review.items.len(), 1);
        assert_eq!(review.items[0].unit_price_cents, Some(400));
        assert_eq!(review.items[0].line_total_cents, 800);
        assert_eq!(review.totals.total_cents, 1465);
    }

    #[test]
    fn test_review_order_flags_unoffered_size() {
        let cart = CartState::new();
        let config = ConfigState::default();

        // Simulate inconsistent upstream data: the kiosk's own mutations
        // can't produce this, so push the item directly.
        cart.with_cart_mut(|c| {
            c.items.push(prism_core::types::CartItem {
                id: "sess42-rogue".to_string(),
                name: "Rogue".to_string(),
                thumbnail: "rogue.jpg".to_string(),
                edit_info: None,
                print_sizes: vec![PrintSize::new("4x6", 299)],
                selected_size: "11x14".to_string(),
                quantity: 3,
            });
        });

        let review = review_order(&cart, &config);
        assert_eq!(review.items[0].unit_price_cents, None);
        assert_eq!(review.items[0].line_total_cents, 0);
        // Still a non-empty cart: shipping applies
        assert_eq!(review.totals.shipping_cents, 599);
    }

    #[tokio::test]
    async fn test_place_order_happy_path() {
        let db = test_db().await;
        let cart = CartState::new();
        let config = ConfigState::default();
        let navigator = RecordingNavigator::new();
        let mut source = SequenceSource::new(vec![41_999]);

        cart.with_cart_mut(|c| {
            c.add_item(new_print("sess42", "5x7", 2))?;
            c.add_item(new_print("sess43", "4x6", 1))?;
            Ok::<(), prism_core::CoreError>(())
        })
        .unwrap();

        let confirmation = place_order(&db, &cart, &config, &navigator, &mut source)
            .await
            .unwrap();

        assert_eq!(confirmation.order_number, 141_999);
        assert_eq!(
            confirmation.session_ids,
            vec!["sess42".to_string(), "sess43".to_string()]
        );
        // 800 + 299 = 1099; tax = round(1099 × 0.0825) = 91; total = 1789
        assert_eq!(confirmation.totals.subtotal_cents, 1099);
        assert_eq!(confirmation.totals.tax_cents, 91);
        assert_eq!(confirmation.totals.total_cents, 1789);

        // Ledger holds the sessions
        let persisted = db.inner().sessions().read().await.unwrap();
        assert_eq!(persisted, set_of(&["sess42", "sess43"]));

        // Cart cleared, shell sent home
        assert!(cart.with_cart(|c| c.is_empty()));
        assert_eq!(navigator.routes(), vec!["/".to_string()]);
    }

    #[tokio::test]
    async fn test_place_order_empty_cart_rejected() {
        let db = test_db().await;
        let cart = CartState::new();
        let config = ConfigState::default();
        let navigator = RecordingNavigator::new();
        let mut source = SequenceSource::new(vec![0]);

        let err = place_order(&db, &cart, &config, &navigator, &mut source)
            .await
            .unwrap_err();
        assert_eq!(err.message, "Cart is empty");

        // Nothing persisted, nowhere navigated
        assert!(db.inner().sessions().read().await.unwrap().is_empty());
        assert!(navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn test_place_order_merges_into_existing_ledger() {
        let db = test_db().await;
        let cart = CartState::new();
        let config = ConfigState::default();
        let navigator = RecordingNavigator::new();
        let mut source = SequenceSource::new(vec![0]);

        // A previous customer's order is already on file
        db.inner()
            .sessions()
            .write(&set_of(&["sess40"]))
            .await
            .unwrap();

        cart.with_cart_mut(|c| c.add_item(new_print("sess42", "5x7", 1)).map(|_| ()))
            .unwrap();

        place_order(&db, &cart, &config, &navigator, &mut source)
            .await
            .unwrap();

        let persisted = db.inner().sessions().read().await.unwrap();
        assert_eq!(persisted, set_of(&["sess40", "sess42"]));
    }

    #[tokio::test]
    async fn test_place_order_twice_same_session_is_idempotent() {
        let db = test_db().await;
        let cart = CartState::new();
        let config = ConfigState::default();
        let navigator = RecordingNavigator::new();
        let mut source = SequenceSource::new(vec![1, 2]);

        cart.with_cart_mut(|c| c.add_item(new_print("sess42", "5x7", 1)).map(|_| ()))
            .unwrap();
        place_order(&db, &cart, &config, &navigator, &mut source)
            .await
            .unwrap();

        // Customer comes back and orders more prints from the same session
        cart.with_cart_mut(|c| c.add_item(new_print("sess42", "4x6", 2)).map(|_| ()))
            .unwrap();
        place_order(&db, &cart, &config, &navigator, &mut source)
            .await
            .unwrap();

        let persisted = db.inner().sessions().read().await.unwrap();
        assert_eq!(persisted, set_of(&["sess42"]));
        assert_eq!(navigator.routes().len(), 2);
    }

    #[tokio::test]
    async fn test_place_order_store_failure_leaves_cart_intact() {
        let db = test_db().await;
        let cart = CartState::new();
        let config = ConfigState::default();
        let navigator = RecordingNavigator::new();
        let mut source = SequenceSource::new(vec![0]);

        cart.with_cart_mut(|c| c.add_item(new_print("sess42", "5x7", 1)).map(|_| ()))
            .unwrap();

        // Kill the pool so the ledger write fails
        db.inner().close().await;

        let result = place_order(&db, &cart, &config, &navigator, &mut source).await;
        assert!(result.is_err());

        // The customer's picks survive for a retry; no navigation happened
        assert_eq!(cart.with_cart(|c| c.item_count()), 1);
        assert!(navigator.routes().is_empty());
    }
}
