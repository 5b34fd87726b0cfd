//! The immutable pizza order record.
//!
//! An [`Order`] is a snapshot: the builder copies its lists when it
//! builds one, and the type exposes no setters. The serialized field
//! names are `size`, `toppings`, `addons`, `delivery` and `createdAt`.

use std::fmt;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::delivery::Delivery;
use crate::size::Size;

/// A single configured pizza purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    size: Size,
    toppings: Vec<String>,
    addons: Vec<String>,
    delivery: Delivery,

    #[serde(with = "iso_millis")]
    created_at: DateTime<Utc>,
}

impl Order {
    pub(crate) fn new(
        size: Size,
        toppings: Vec<String>,
        addons: Vec<String>,
        delivery: Delivery,
        created_at: DateTime<Utc>,
    ) -> Self {
        Order {
            size,
            toppings,
            addons,
            delivery,
            created_at,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn toppings(&self) -> &[String] {
        &self.toppings
    }

    pub fn addons(&self) -> &[String] {
        &self.addons
    }

    pub fn delivery(&self) -> Delivery {
        self.delivery
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Current UTC time at the millisecond precision orders are stored with,
    /// so a timestamp survives a JSON round trip unchanged.
    pub fn current_timestamp() -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }
}

/// One-line summary, e.g. `Large pizza - Cheese, Olives + Extra Cheese (Home Delivery)`.
impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pizza - ", self.size)?;
        if self.toppings.is_empty() {
            f.write_str("no toppings")?;
        } else {
            f.write_str(&self.toppings.join(", "))?;
        }
        if !self.addons.is_empty() {
            write!(f, " + {}", self.addons.join(", "))?;
        }
        write!(f, " ({})", self.delivery)
    }
}

/// RFC 3339 in UTC with millisecond precision: `2026-10-14T09:30:00.123Z`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
