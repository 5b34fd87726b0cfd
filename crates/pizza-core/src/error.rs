//! Error types for the order desk core.
//!
//! The core operations themselves are infallible: out-of-range removals
//! are ignored and builder inputs are never rejected. Errors only show
//! up when turning free text into one of the closed menu enums.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Text did not name one of the known pizza sizes.
    #[error("unknown pizza size: {0:?}")]
    UnknownSize(String),

    /// Text did not name one of the known delivery methods.
    #[error("unknown delivery method: {0:?}")]
    UnknownDelivery(String),
}
