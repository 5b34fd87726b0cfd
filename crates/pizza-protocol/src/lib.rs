//! pizza-protocol
//!
//! Text encodings for the order desk.
//!
//! This crate turns logical desk values (`pizza_core::Order`,
//! `Command`, `Event`) into text and back again.
//!
//! - [`json_codec`]    : JSON order list (display, export)
//! - [`command_codec`] : one-command-per-line scripts (replay, tools)

pub mod error;
pub mod line_types;
pub mod json_codec;
pub mod command_codec;

pub use error::ProtocolError;

pub use json_codec::{decode_orders, encode_orders};
pub use command_codec::{format_event, parse_input_line};
