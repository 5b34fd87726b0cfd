// crates/pizza-terminal/src/components/mod.rs

pub mod order_form;
pub mod order_list;
pub mod json_view;
pub mod status_bar;
pub mod help;
