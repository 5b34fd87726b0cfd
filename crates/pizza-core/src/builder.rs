//! Fluent accumulator for order attributes.
//!
//! ```
//! use pizza_core::{Delivery, OrderBuilder, Size};
//!
//! let order = OrderBuilder::new()
//!     .set_size(Size::Large)
//!     .add_topping("Cheese")
//!     .set_delivery(Delivery::HomeDelivery)
//!     .build();
//!
//! assert_eq!(order.size(), Size::Large);
//! assert_eq!(order.toppings(), ["Cheese"]);
//! ```

use chrono::{DateTime, Utc};

use crate::delivery::Delivery;
use crate::order::Order;
use crate::size::Size;

/// Mutable order configuration.
///
/// Defaults to a `Medium` pickup pizza with no toppings or addons.
/// [`build`](OrderBuilder::build) borrows the builder, so one builder can
/// produce any number of independent orders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBuilder {
    size: Size,
    toppings: Vec<String>,
    addons: Vec<String>,
    delivery: Delivery,
}

impl OrderBuilder {
    pub fn new() -> Self {
        OrderBuilder::default()
    }

    pub fn set_size(&mut self, size: Size) -> &mut Self {
        self.size = size;
        self
    }

    /// Appends; duplicates are kept.
    pub fn add_topping(&mut self, topping: impl Into<String>) -> &mut Self {
        self.toppings.push(topping.into());
        self
    }

    /// Appends; duplicates are kept.
    pub fn add_addon(&mut self, addon: impl Into<String>) -> &mut Self {
        self.addons.push(addon.into());
        self
    }

    pub fn set_delivery(&mut self, delivery: Delivery) -> &mut Self {
        self.delivery = delivery;
        self
    }

    /// Snapshot the current configuration, stamped with the current time.
    pub fn build(&self) -> Order {
        self.build_at(Order::current_timestamp())
    }

    /// Snapshot the current configuration with an explicit timestamp.
    pub fn build_at(&self, created_at: DateTime<Utc>) -> Order {
        Order::new(
            self.size,
            self.toppings.clone(),
            self.addons.clone(),
            self.delivery,
            created_at,
        )
    }
}

/// Configure a fresh builder and build in one step.
pub fn build_order<I, J>(size: Size, toppings: I, addons: J, delivery: Delivery) -> Order
where
    I: IntoIterator,
    I::Item: Into<String>,
    J: IntoIterator,
    J::Item: Into<String>,
{
    let mut builder = OrderBuilder::new();
    builder.set_size(size).set_delivery(delivery);
    for topping in toppings {
        builder.add_topping(topping);
    }
    for addon in addons {
        builder.add_addon(addon);
    }
    builder.build()
}
