//! In-memory stock mapping and the mutation/query operations on it.

use std::collections::BTreeMap;

use stockroom_core::{InventoryError, InventoryResult};

use crate::activity::ActivityLog;

/// Threshold used by the stock report when the caller does not pick one.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Mapping from item name to on-hand quantity.
///
/// A plain owned value with no interior locking; callers that share one
/// across threads must add their own mutual exclusion and run `load`/`save`
/// under it. Listing order is always lexicographic by item name.
///
/// Quantities can go negative through `add` (negative deltas are accepted
/// and simply accumulate); `remove` is the only operation that deletes an
/// item, as soon as its remaining quantity is no longer positive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    stock: BTreeMap<String, i64>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self {
            stock: BTreeMap::new(),
        }
    }

    /// Add `qty` of `item`, creating the item at 0 if it is new.
    ///
    /// The delta may be zero or negative; the result is stored as-is and
    /// the item is never deleted here. When the caller supplies an
    /// [`ActivityLog`], a timestamped entry is appended after the update.
    pub fn add(
        &mut self,
        item: &str,
        qty: i64,
        activity: Option<&mut ActivityLog>,
    ) -> InventoryResult<()> {
        ensure_item_name(item)?;

        let prev = self.stock.get(item).copied().unwrap_or(0);
        let next = prev + qty;
        self.stock.insert(item.to_string(), next);

        let entry = format!("added {qty} of {item} (previous {prev}, now {next})");
        if let Some(log) = activity {
            log.record(&entry);
        }
        tracing::info!("{entry}");

        Ok(())
    }

    /// Remove `qty` of `item`, deleting the item outright when the
    /// remaining quantity drops to zero or below.
    ///
    /// The item must already exist and `qty` must be non-negative; the
    /// existence check runs first, so a negative `qty` against a missing
    /// item reports `NotFound`.
    pub fn remove(&mut self, item: &str, qty: i64) -> InventoryResult<()> {
        ensure_item_name(item)?;

        let prev = match self.stock.get(item) {
            Some(held) => *held,
            None => return Err(InventoryError::not_found(item)),
        };

        if qty < 0 {
            return Err(InventoryError::validation(
                "removal quantity must be non-negative",
            ));
        }

        let next = prev - qty;
        tracing::info!("removed {qty} of {item}; remaining {next}");

        if next <= 0 {
            self.stock.remove(item);
            tracing::info!("{item} is out of stock and was dropped from the inventory");
        } else {
            self.stock.insert(item.to_string(), next);
        }

        Ok(())
    }

    /// Current quantity of `item`; absent items report 0 rather than an
    /// error.
    pub fn quantity(&self, item: &str) -> InventoryResult<i64> {
        ensure_item_name(item)?;
        Ok(self.stock.get(item).copied().unwrap_or(0))
    }

    /// Names of the items with quantity strictly below `threshold`, in
    /// listing order.
    pub fn low_stock(&self, threshold: i64) -> Vec<String> {
        self.stock
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// All `(name, quantity)` pairs in listing order.
    pub fn items(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.stock.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    /// Number of distinct items currently held.
    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Swap in a freshly loaded mapping, discarding the current one.
    pub(crate) fn replace(&mut self, stock: BTreeMap<String, i64>) {
        self.stock = stock;
    }

    pub(crate) fn stock(&self) -> &BTreeMap<String, i64> {
        &self.stock
    }
}

fn ensure_item_name(item: &str) -> InventoryResult<()> {
    if item.is_empty() {
        return Err(InventoryError::validation("item name cannot be empty"));
    }
    Ok(())
}
