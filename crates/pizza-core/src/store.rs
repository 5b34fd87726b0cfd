//! Session order store.
//!
//! Holds the pending orders of one session in placement order. Orders
//! are identified only by position; duplicates are allowed. The store
//! is owned by whoever handles the session (normally an
//! [`OrderDesk`](crate::desk::OrderDesk)) rather than living in a global.
//!
//! Only four mutations exist: append, remove-at, clear and checkout.
//! Reads hand out copies.

use crate::checkout::Checkout;
use crate::order::Order;

#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        OrderStore::default()
    }

    /// Append `order` after every order already placed.
    pub fn place_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Remove the order at zero-based `position`, shifting later orders
    /// one place left.
    ///
    /// Positions outside `0..len()` are ignored and give `None`.
    pub fn remove_order(&mut self, position: usize) -> Option<Order> {
        if position < self.orders.len() {
            Some(self.orders.remove(position))
        } else {
            None
        }
    }

    pub fn clear_orders(&mut self) {
        self.orders.clear();
    }

    /// Copy of every order, in placement order.
    pub fn get_all(&self) -> Vec<Order> {
        self.orders.clone()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Take every pending order at once.
    ///
    /// An empty store is left untouched and reports [`Checkout::Empty`].
    pub fn checkout(&mut self) -> Checkout {
        if self.orders.is_empty() {
            Checkout::Empty
        } else {
            Checkout::Placed(std::mem::take(&mut self.orders))
        }
    }
}
