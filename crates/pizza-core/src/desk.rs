//! Session order desk.
//!
//! Owns the session's [`OrderStore`] and turns [`Command`]s into
//! [`Event`]s. The desk is an ordinary value: construct one per session
//! and hand it to whatever handles user input.

use tracing::debug;

use crate::builder::build_order;
use crate::checkout::Checkout;
use crate::messages::{Command, Event, OrderRequest};
use crate::order::Order;
use crate::store::OrderStore;

#[derive(Debug, Default)]
pub struct OrderDesk {
    store: OrderStore,
}

impl OrderDesk {
    /// Create a desk with an empty order list.
    pub fn new() -> Self {
        OrderDesk::default()
    }

    /// Process a single command and return the resulting events.
    pub fn process(&mut self, command: Command) -> Vec<Event> {
        match command {
            Command::Add(request) => vec![self.process_add(request)],
            Command::Remove(position) => vec![self.process_remove(position)],
            Command::Clear => vec![self.clear()],
            Command::Checkout => vec![self.checkout()],
            Command::List => vec![Event::Listing {
                orders: self.store.get_all(),
            }],
        }
    }

    /// Append an already built order.
    pub fn place(&mut self, order: Order) -> Event {
        let position = self.store.len();
        debug!(position, order = %order, "order placed");
        self.store.place_order(order.clone());
        Event::Placed { position, order }
    }

    /// Remove the order at `position`; out-of-range positions are ignored.
    pub fn remove(&mut self, position: usize) -> Event {
        match self.store.remove_order(position) {
            Some(order) => {
                debug!(position, order = %order, "order removed");
                Event::Removed { position, order }
            }
            None => {
                debug!(position, len = self.store.len(), "remove ignored, position out of range");
                Event::RemoveIgnored {
                    position: i64::try_from(position).unwrap_or(i64::MAX),
                }
            }
        }
    }

    pub fn clear(&mut self) -> Event {
        let count = self.store.len();
        self.store.clear_orders();
        debug!(count, "orders cleared");
        Event::Cleared { count }
    }

    pub fn checkout(&mut self) -> Event {
        match self.store.checkout() {
            Checkout::Empty => {
                debug!("checkout requested with no pending orders");
                Event::CartEmpty
            }
            Checkout::Placed(orders) => {
                debug!(count = orders.len(), "orders checked out");
                Event::CheckedOut { orders }
            }
        }
    }

    /// Read access to the pending orders.
    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    // -------------------------------------------------------------------------
    // Internal handlers
    // -------------------------------------------------------------------------

    fn process_add(&mut self, request: OrderRequest) -> Event {
        let OrderRequest {
            size,
            toppings,
            addons,
            delivery,
        } = request;
        self.place(build_order(size, toppings, addons, delivery))
    }

    fn process_remove(&mut self, position: i64) -> Event {
        match usize::try_from(position) {
            Ok(position) => self.remove(position),
            Err(_) => {
                debug!(position, "remove ignored, negative position");
                Event::RemoveIgnored { position }
            }
        }
    }
}
