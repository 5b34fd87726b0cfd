//! Configuration for the order terminal.
//!
//! Defaults can be overridden by a TOML file, located in this order:
//!
//! - the `--config PATH` flag
//! - the `PIZZA_CONFIG` environment variable
//! - otherwise built-in defaults are used
//!
//! ```toml
//! [menu]
//! toppings = ["Cheese", "Pepperoni", "Mushrooms", "Olives", "Onions", "Peppers"]
//! addons = ["Extra Cheese", "Garlic Dip", "Soft Drink"]
//!
//! [form]
//! default_size = "Medium"
//! default_delivery = "Home Delivery"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use pizza_core::{Delivery, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "PIZZA_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Configuration for the order terminal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub menu: MenuConfig,
    pub form: FormDefaults,
}

/// Checkbox labels offered by the form, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub toppings: Vec<String>,
    pub addons: Vec<String>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            toppings: ["Cheese", "Pepperoni", "Mushrooms", "Olives", "Onions", "Peppers"]
                .into_iter()
                .map(String::from)
                .collect(),
            addons: ["Extra Cheese", "Garlic Dip", "Soft Drink"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Values the form starts with and returns to on reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub default_size: Size,
    pub default_delivery: Delivery,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            default_size: Size::Medium,
            default_delivery: Delivery::HomeDelivery,
        }
    }
}

impl AppConfig {
    /// Load from `path`, else from `$PIZZA_CONFIG`, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = path
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        match resolved {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("no config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}
