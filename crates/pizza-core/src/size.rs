//! Pizza size (Small / Medium / Large).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Pizza size. The allowed set is closed; anything else is rejected
/// when parsing text. Deserialization goes through [`FromStr`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    /// Every size, in menu order.
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    /// Display label, also the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        }
    }

    /// Next size in menu order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Size::Small => Size::Medium,
            Size::Medium => Size::Large,
            Size::Large => Size::Small,
        }
    }

    /// Previous size in menu order, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Size::Small => Size::Large,
            Size::Medium => Size::Small,
            Size::Large => Size::Medium,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = CoreError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Size::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::UnknownSize(trimmed.to_string()))
    }
}

impl TryFrom<String> for Size {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
