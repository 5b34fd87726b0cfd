//! Outcome of placing all pending orders at once.

use crate::order::Order;

/// Result of [`OrderStore::checkout`](crate::store::OrderStore::checkout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checkout {
    /// Nothing was pending; the store is unchanged.
    Empty,

    /// Every pending order, in placement order. The store is now empty.
    Placed(Vec<Order>),
}

impl Checkout {
    /// Number of orders placed (0 for [`Checkout::Empty`]).
    pub fn count(&self) -> usize {
        match self {
            Checkout::Empty => 0,
            Checkout::Placed(orders) => orders.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Checkout::Empty)
    }

    /// The placed orders; empty for [`Checkout::Empty`].
    pub fn into_orders(self) -> Vec<Order> {
        match self {
            Checkout::Empty => Vec::new(),
            Checkout::Placed(orders) => orders,
        }
    }
}
