//! Delivery method (Pickup vs Home Delivery).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Serialized as its label; deserialized through [`FromStr`], so JSON,
/// config files and command lines accept the same spellings.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Delivery {
    #[default]
    Pickup,
    #[serde(rename = "Home Delivery")]
    HomeDelivery,
}

impl Delivery {
    pub const ALL: [Delivery; 2] = [Delivery::Pickup, Delivery::HomeDelivery];

    pub fn as_str(self) -> &'static str {
        match self {
            Delivery::Pickup => "Pickup",
            Delivery::HomeDelivery => "Home Delivery",
        }
    }

    /// The other delivery method; there are only two.
    pub fn toggle(self) -> Self {
        match self {
            Delivery::Pickup => Delivery::HomeDelivery,
            Delivery::HomeDelivery => Delivery::Pickup,
        }
    }
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Delivery {
    type Err = CoreError;

    /// Accepts `"Pickup"`, `"Home Delivery"` and `"HomeDelivery"`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let squashed: String = trimmed.split_whitespace().collect();
        Delivery::ALL
            .into_iter()
            .find(|delivery| delivery.as_str().replace(' ', "").eq_ignore_ascii_case(&squashed))
            .ok_or_else(|| CoreError::UnknownDelivery(trimmed.to_string()))
    }
}

impl TryFrom<String> for Delivery {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
