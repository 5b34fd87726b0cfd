// crates/pizza-protocol/tests/json_orders.rs
use chrono::{Duration, TimeZone, Utc};
use pizza_core::{Delivery, Order, OrderBuilder, Size};
use pizza_protocol::{decode_orders, encode_orders, ProtocolError};

fn sample_orders() -> Vec<Order> {
    let at = Utc.with_ymd_and_hms(2026, 10, 14, 9, 30, 0).unwrap() + Duration::milliseconds(250);
    vec![
        OrderBuilder::new()
            .set_size(Size::Large)
            .add_topping("Cheese")
            .add_topping("Olives")
            .add_addon("Extra Cheese")
            .set_delivery(Delivery::HomeDelivery)
            .build_at(at),
        OrderBuilder::new().build_at(at + Duration::seconds(5)),
    ]
}

#[test]
fn empty_list_encodes_as_an_empty_array() {
    assert_eq!(encode_orders(&[]).unwrap(), "[]");
}

#[test]
fn encoded_orders_carry_every_field() {
    let text = encode_orders(&sample_orders()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(
        value[0],
        serde_json::json!({
            "size": "Large",
            "toppings": ["Cheese", "Olives"],
            "addons": ["Extra Cheese"],
            "delivery": "Home Delivery",
            "createdAt": "2026-10-14T09:30:00.250Z",
        })
    );
    assert_eq!(value[1]["size"], "Medium");
    assert_eq!(value[1]["delivery"], "Pickup");
    assert_eq!(value[1]["createdAt"], "2026-10-14T09:30:05.250Z");
}

#[test]
fn encoding_is_pretty_printed_with_two_space_indent() {
    let text = encode_orders(&sample_orders()).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "[");
    assert_eq!(lines[1], "  {");
    assert_eq!(lines[2], "    \"size\": \"Large\",");
    assert_eq!(*lines.last().unwrap(), "]");
}

#[test]
fn decoding_restores_the_encoded_orders() {
    let orders = sample_orders();
    let text = encode_orders(&orders).unwrap();
    assert_eq!(decode_orders(&text).unwrap(), orders);
}

#[test]
fn decoding_rejects_sizes_outside_the_menu() {
    let text = r#"[{"size":"Jumbo","toppings":[],"addons":[],"delivery":"Pickup","createdAt":"2026-10-14T09:30:00.000Z"}]"#;
    assert!(matches!(decode_orders(text), Err(ProtocolError::Json(_))));
}

#[test]
fn decoding_rejects_bad_timestamps() {
    let text = r#"[{"size":"Small","toppings":[],"addons":[],"delivery":"Pickup","createdAt":"yesterday"}]"#;
    assert!(decode_orders(text).is_err());
}
