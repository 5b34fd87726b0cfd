//! pizza-core
//!
//! Pure order desk logic:
//! - menu types (size, delivery)
//! - immutable order snapshots and their builder
//! - the session order store
//! - commands/events and the desk that processes them

pub mod size;
pub mod delivery;
pub mod error;
pub mod order;
pub mod builder;
pub mod checkout;
pub mod store;
pub mod messages;
pub mod desk;

pub use size::Size;
pub use delivery::Delivery;

pub use messages::{Command, Event, OrderRequest};

pub use order::Order;
pub use builder::{build_order, OrderBuilder};
pub use checkout::Checkout;
pub use store::OrderStore;
pub use desk::OrderDesk;
pub use error::CoreError;
