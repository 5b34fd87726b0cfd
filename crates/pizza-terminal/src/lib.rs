//! pizza-terminal
//!
//! Terminal front end for the order desk:
//! - [`app`]: form and order-list state, key handling
//! - [`ui`] / [`components`]: ratatui rendering
//! - [`script`]: headless command-script replay
//! - [`config`]: menu and form defaults

pub mod app;
pub mod components;
pub mod config;
pub mod script;
pub mod ui;
