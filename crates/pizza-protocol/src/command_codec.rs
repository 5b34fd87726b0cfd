//! Line-based command codec.
//!
//! Input format (lines → `Command`):
//!
//! - Add an order:
//!   `A, size, toppings(; separated), addons(; separated), delivery`
//!   (either list may be empty: `A, Small, , , Pickup`)
//!
//! - Remove by zero-based position:
//!   `R, position`
//!
//! - Clear, checkout (place all), list:
//!   `X` / `P` / `L`
//!
//! Output format (`Event` → line):
//!
//! - Placed:        `P, position, summary`
//! - Removed:       `R, position, summary`
//! - RemoveIgnored: `I, position`
//! - Cleared:       `X, count`
//! - CheckedOut:    `O, count`
//! - CartEmpty:     `E, Cart is empty`
//! - Listing:       `L, count`

use pizza_core::{Command, Delivery, Event, OrderRequest, Size};

use crate::error::ProtocolError;
use crate::line_types::{CommandTag, EventTag, COMMENT_PREFIX, FIELD_SEPARATOR, LIST_SEPARATOR};

/// Notification text for a checkout with nothing pending.
pub const CART_EMPTY_MESSAGE: &str = "Cart is empty";

/// Parse a single line into a `Command`.
///
/// Returns `Ok(None)` for blank lines or comments (starting with `#`).
pub fn parse_input_line(line: &str) -> Result<Option<Command>, ProtocolError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
        return Ok(None);
    }

    let tokens = split_and_trim(trimmed, FIELD_SEPARATOR);
    let tag = parse_tag(&tokens[0])?;

    if tokens.len() != tag.field_count() {
        return Err(ProtocolError::FieldCount {
            tag: tag.as_char(),
            expected: tag.field_count(),
            actual: tokens.len(),
        });
    }

    let command = match tag {
        CommandTag::Add => parse_add(&tokens)?,
        CommandTag::Remove => parse_remove(&tokens)?,
        CommandTag::Clear => Command::Clear,
        CommandTag::Checkout => Command::Checkout,
        CommandTag::List => Command::List,
    };

    Ok(Some(command))
}

fn parse_tag(token: &str) -> Result<CommandTag, ProtocolError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            CommandTag::from_char(c).ok_or_else(|| ProtocolError::UnknownCommand(token.to_string()))
        }
        _ => Err(ProtocolError::UnknownCommand(token.to_string())),
    }
}

fn parse_add(tokens: &[String]) -> Result<Command, ProtocolError> {
    // A, size, toppings, addons, delivery
    let size: Size = tokens[1].parse()?;
    let toppings = split_list(&tokens[2]);
    let addons = split_list(&tokens[3]);
    let delivery: Delivery = tokens[4].parse()?;

    Ok(Command::Add(OrderRequest {
        size,
        toppings,
        addons,
        delivery,
    }))
}

fn parse_remove(tokens: &[String]) -> Result<Command, ProtocolError> {
    // R, position
    let position = tokens[1]
        .parse::<i64>()
        .map_err(|_| ProtocolError::InvalidPosition(tokens[1].clone()))?;
    Ok(Command::Remove(position))
}

/// Format an `Event` as a single line.
pub fn format_event(event: &Event) -> String {
    match event {
        Event::Placed { position, order } => {
            format!("{}, {}, {}", EventTag::Placed.as_char(), position, order)
        }
        Event::Removed { position, order } => {
            format!("{}, {}, {}", EventTag::Removed.as_char(), position, order)
        }
        Event::RemoveIgnored { position } => {
            format!("{}, {}", EventTag::RemoveIgnored.as_char(), position)
        }
        Event::Cleared { count } => format!("{}, {}", EventTag::Cleared.as_char(), count),
        Event::CheckedOut { orders } => {
            format!("{}, {}", EventTag::CheckedOut.as_char(), orders.len())
        }
        Event::CartEmpty => format!("{}, {}", EventTag::CartEmpty.as_char(), CART_EMPTY_MESSAGE),
        Event::Listing { orders } => format!("{}, {}", EventTag::Listing.as_char(), orders.len()),
    }
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn split_and_trim(s: &str, delimiter: char) -> Vec<String> {
    s.split(delimiter)
        .map(|tok| tok.trim().to_string())
        .collect()
}

/// Empty items are dropped, so an empty field is an empty list.
fn split_list(s: &str) -> Vec<String> {
    split_and_trim(s, LIST_SEPARATOR)
        .into_iter()
        .filter(|item| !item.is_empty())
        .collect()
}
