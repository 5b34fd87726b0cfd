// crates/pizza-core/tests/desk_commands.rs
use pizza_core::{Command, Delivery, Event, OrderDesk, OrderRequest, Size};

fn request(size: Size, toppings: &[&str]) -> OrderRequest {
    OrderRequest {
        size,
        toppings: toppings.iter().map(|t| t.to_string()).collect(),
        addons: Vec::new(),
        delivery: Delivery::Pickup,
    }
}

#[test]
fn add_reports_the_position_of_the_new_order() {
    let mut desk = OrderDesk::new();

    let first = desk.process(Command::Add(request(Size::Small, &["Cheese"])));
    let second = desk.process(Command::Add(request(Size::Large, &[])));

    match (&first[..], &second[..]) {
        ([Event::Placed { position: 0, order: a }], [Event::Placed { position: 1, order: b }]) => {
            assert_eq!(a.size(), Size::Small);
            assert_eq!(b.size(), Size::Large);
        }
        other => panic!("unexpected events: {:?}", other),
    }
    assert_eq!(desk.store().len(), 2);
}

#[test]
fn remove_handles_in_range_negative_and_past_the_end_positions() {
    let mut desk = OrderDesk::new();
    desk.process(Command::Add(request(Size::Small, &["A"])));
    desk.process(Command::Add(request(Size::Medium, &["B"])));

    assert_eq!(
        desk.process(Command::Remove(-1)),
        vec![Event::RemoveIgnored { position: -1 }]
    );
    assert_eq!(
        desk.process(Command::Remove(2)),
        vec![Event::RemoveIgnored { position: 2 }]
    );
    assert_eq!(desk.store().len(), 2);

    let events = desk.process(Command::Remove(0));
    match &events[..] {
        [Event::Removed { position: 0, order }] => assert_eq!(order.toppings(), ["A"]),
        other => panic!("unexpected events: {:?}", other),
    }
    assert_eq!(desk.store().get_all()[0].toppings(), ["B"]);
}

#[test]
fn clear_reports_how_many_orders_were_dropped() {
    let mut desk = OrderDesk::new();
    desk.process(Command::Add(request(Size::Small, &[])));
    desk.process(Command::Add(request(Size::Small, &[])));

    assert_eq!(desk.process(Command::Clear), vec![Event::Cleared { count: 2 }]);
    assert!(desk.store().is_empty());
}

#[test]
fn checkout_with_nothing_pending_is_a_notification() {
    let mut desk = OrderDesk::new();
    assert_eq!(desk.process(Command::Checkout), vec![Event::CartEmpty]);
    assert!(desk.store().is_empty());
}

#[test]
fn checkout_drains_pending_orders() {
    let mut desk = OrderDesk::new();
    desk.process(Command::Add(request(Size::Small, &["A"])));
    desk.process(Command::Add(request(Size::Large, &["B"])));
    let pending = desk.store().get_all();

    assert_eq!(
        desk.process(Command::Checkout),
        vec![Event::CheckedOut { orders: pending }]
    );
    assert!(desk.store().is_empty());
}

#[test]
fn list_returns_a_snapshot() {
    let mut desk = OrderDesk::new();
    desk.process(Command::Add(request(Size::Large, &["Cheese"])));

    let events = desk.process(Command::List);
    assert_eq!(
        events,
        vec![Event::Listing {
            orders: desk.store().get_all()
        }]
    );
}
