//! JSON encoding of the pending order list.
//!
//! The encoded form is a pretty-printed array (two-space indent) of
//! order objects:
//!
//! ```text
//! [
//!   {
//!     "size": "Large",
//!     "toppings": ["Cheese", "Olives"],
//!     "addons": ["Extra Cheese"],
//!     "delivery": "Home Delivery",
//!     "createdAt": "2026-10-14T09:30:00.123Z"
//!   }
//! ]
//! ```
//!
//! (serde_json puts each list item on its own line; the sketch above is
//! compressed.)

use pizza_core::Order;

use crate::error::ProtocolError;

/// Encode `orders` as a pretty-printed JSON array.
pub fn encode_orders(orders: &[Order]) -> Result<String, ProtocolError> {
    Ok(serde_json::to_string_pretty(orders)?)
}

/// Decode a JSON array of orders.
///
/// Sizes and delivery methods must be inside the menu, and `createdAt`
/// must be an RFC 3339 timestamp.
pub fn decode_orders(text: &str) -> Result<Vec<Order>, ProtocolError> {
    Ok(serde_json::from_str(text)?)
}
