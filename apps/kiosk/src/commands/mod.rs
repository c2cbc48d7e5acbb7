//! # Commands Module
//!
//! The command surface the webview shell invokes.
//!
//! ## Command Inventory
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Kiosk Commands                                    │
//! │                                                                         │
//! │  Cart (commands/cart.rs)             Checkout (commands/order.rs)      │
//! │  ───────────────────────             ────────────────────────────      │
//! │  get_cart                            review_order                      │
//! │  add_to_cart                         place_order                       │
//! │  update_cart_item                                                      │
//! │  adjust_quantity                                                       │
//! │  remove_from_cart                                                      │
//! │  clear_cart                                                            │
//! │                                                                         │
//! │  Commands take their state dependencies as plain parameters; the       │
//! │  embedding shell owns construction and wiring.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod order;
