// crates/pizza-core/tests/order_store.rs
use pizza_core::{build_order, Checkout, Delivery, Order, OrderBuilder, OrderStore, Size};

fn order_with_topping(topping: &str) -> Order {
    OrderBuilder::new().add_topping(topping).build()
}

#[test]
fn place_appends_at_the_end() {
    let mut store = OrderStore::new();
    store.place_order(order_with_topping("Cheese"));

    let placed = order_with_topping("Olives");
    store.place_order(placed.clone());

    let all = store.get_all();
    assert_eq!(all.len(), 2);
    assert_eq!(all.last(), Some(&placed));
}

#[test]
fn duplicates_are_kept() {
    let mut store = OrderStore::new();
    let order = order_with_topping("Cheese");
    store.place_order(order.clone());
    store.place_order(order.clone());

    assert_eq!(store.get_all(), vec![order.clone(), order]);
}

#[test]
fn remove_in_range_shifts_later_orders_left() {
    let mut store = OrderStore::new();
    let a = order_with_topping("A");
    let b = order_with_topping("B");
    let c = order_with_topping("C");
    for order in [&a, &b, &c] {
        store.place_order(order.clone());
    }

    assert_eq!(store.remove_order(1), Some(b));
    assert_eq!(store.get_all(), vec![a, c]);
}

#[test]
fn remove_out_of_range_is_a_no_op() {
    let mut store = OrderStore::new();
    store.place_order(order_with_topping("A"));
    store.place_order(order_with_topping("B"));
    let before = store.get_all();

    assert_eq!(store.remove_order(2), None);
    assert_eq!(store.remove_order(usize::MAX), None);
    assert_eq!(store.get_all(), before);

    let mut empty = OrderStore::new();
    assert_eq!(empty.remove_order(0), None);
    assert!(empty.is_empty());
}

#[test]
fn clear_empties_the_store() {
    let mut store = OrderStore::new();
    store.place_order(order_with_topping("A"));
    store.place_order(order_with_topping("B"));

    store.clear_orders();

    assert!(store.get_all().is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn get_all_returns_an_independent_copy() {
    let mut store = OrderStore::new();
    store.place_order(order_with_topping("A"));

    let mut copy = store.get_all();
    copy.clear();
    copy.push(order_with_topping("X"));
    copy.push(order_with_topping("Y"));

    assert_eq!(store.len(), 1);
    assert_eq!(store.get_all()[0].toppings(), ["A"]);
}

#[test]
fn checkout_on_empty_store_changes_nothing() {
    let mut store = OrderStore::new();
    let outcome = store.checkout();

    assert_eq!(outcome, Checkout::Empty);
    assert!(outcome.is_empty());
    assert_eq!(outcome.count(), 0);
    assert!(store.is_empty());
}

#[test]
fn checkout_takes_every_order_in_placement_order() {
    let mut store = OrderStore::new();
    let a = order_with_topping("A");
    let b = order_with_topping("B");
    store.place_order(a.clone());
    store.place_order(b.clone());

    let outcome = store.checkout();

    assert_eq!(outcome.count(), 2);
    assert_eq!(outcome.into_orders(), vec![a, b]);
    assert!(store.is_empty());
}

#[test]
fn large_cheese_olive_delivery_round_trip() {
    let mut store = OrderStore::new();
    let order = build_order(
        Size::Large,
        ["Cheese", "Olives"],
        ["Extra Cheese"],
        Delivery::HomeDelivery,
    );

    store.place_order(order.clone());
    let all = store.get_all();
    assert_eq!(all[0], order);
    assert_eq!(all[0].size(), Size::Large);
    assert_eq!(all[0].toppings(), ["Cheese", "Olives"]);
    assert_eq!(all[0].addons(), ["Extra Cheese"]);
    assert_eq!(all[0].delivery(), Delivery::HomeDelivery);

    store.remove_order(0);
    assert!(store.get_all().is_empty());
}
