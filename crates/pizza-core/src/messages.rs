//! Message types used by the order desk.
//!
//! These are presentation-agnostic logical messages:
//! - [`Command`]: what the desk consumes.
//! - [`Event`]: what the desk produces.
//!
//! Text encoders live in the `pizza-protocol` crate; this module is
//! purely logical.

use crate::delivery::Delivery;
use crate::order::Order;
use crate::size::Size;

/// A request into the order desk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Build an order from the request and append it.
    Add(OrderRequest),

    /// Remove the order at a zero-based position.
    ///
    /// Signed so that a negative position from text input reaches the
    /// desk and is ignored there like any other out-of-range position.
    Remove(i64),

    /// Drop every pending order.
    Clear,

    /// Place every pending order at once.
    Checkout,

    /// Snapshot the pending orders.
    List,
}

/// Everything needed to build one order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderRequest {
    pub size: Size,
    pub toppings: Vec<String>,
    pub addons: Vec<String>,
    pub delivery: Delivery,
}

/// An event emitted by the order desk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// An order was appended at `position`.
    Placed { position: usize, order: Order },

    /// The order at `position` was removed.
    Removed { position: usize, order: Order },

    /// A removal named a position outside the list; nothing changed.
    RemoveIgnored { position: i64 },

    /// `count` orders were dropped.
    Cleared { count: usize },

    /// Every pending order was placed; the list is now empty.
    CheckedOut { orders: Vec<Order> },

    /// Checkout was requested with nothing pending; nothing changed.
    CartEmpty,

    /// Copy of the pending orders.
    Listing { orders: Vec<Order> },
}
