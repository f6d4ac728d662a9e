//! Inventory error model.

use thiserror::Error;

/// Result type used across the inventory domain.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Caller-visible failure of an inventory operation.
///
/// Keep this focused on deterministic domain failures (bad arguments,
/// missing items). Persistence problems are absorbed inside load/save and
/// reported through the log instead of surfacing here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// An argument failed validation (e.g. empty item name, negative
    /// removal quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The targeted item is not present in the store.
    #[error("item '{0}' not found in inventory")]
    NotFound(String),
}

impl InventoryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }
}

