//! Errors that can arise when decoding text.

use pizza_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Malformed JSON, or JSON that does not describe a list of orders.
    #[error("invalid order JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// First field of a command line is not a known tag.
    #[error("unknown command tag: {0:?}")]
    UnknownCommand(String),

    /// A command line has the wrong number of fields for its tag.
    #[error("command {tag} expects {expected} field(s), got {actual}")]
    FieldCount {
        tag: char,
        expected: usize,
        actual: usize,
    },

    /// The position field of a remove command is not an integer.
    #[error("invalid position: {0:?}")]
    InvalidPosition(String),

    /// Size or delivery text outside the menu.
    #[error(transparent)]
    Core(#[from] CoreError),
}
