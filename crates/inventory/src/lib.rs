//! `stockroom-inventory` — the inventory store, its audit trail, and JSON
//! persistence.
//!
//! Mutation and query operations fail fast with
//! [`stockroom_core::InventoryError`]; `load`/`save` absorb persistence
//! failures and report them through the log instead.

pub mod activity;
pub mod persistence;
pub mod store;

pub use activity::ActivityLog;
pub use persistence::DEFAULT_INVENTORY_PATH;
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory};

