//! JSON file persistence for the inventory.
//!
//! `load` and `save` form a resilience boundary: every failure is absorbed
//! here and reported through the log at the appropriate level, so callers
//! can run them unconditionally at startup and shutdown. A structurally
//! valid file is additionally cleaned entry by entry instead of being
//! rejected wholesale.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::store::Inventory;

/// Default location of the persisted inventory.
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";

/// Internal persistence failure; never escapes `load`/`save`.
#[derive(Debug, Error)]
enum PersistenceError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("failed to parse inventory JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("inventory file must contain a JSON object mapping items to quantities")]
    NotAnObject,
}

impl Inventory {
    /// Replace the in-memory stock with the contents of the JSON file at
    /// `path`.
    ///
    /// Never fails to the caller. A missing file is a warning, malformed
    /// JSON and everything else (wrong top-level shape, other I/O failures,
    /// non-UTF-8 content) are error records; in every failure case the
    /// current stock stays in place. The stock is replaced only when the
    /// file produced a usable mapping.
    pub fn load(&mut self, path: &Path) {
        match read_stock_file(path) {
            Ok(stock) => {
                let count = stock.len();
                self.replace(stock);
                tracing::info!("loaded {count} item(s) from {}", path.display());
            }
            Err(PersistenceError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    "inventory file {} not found; keeping current stock",
                    path.display()
                );
            }
            Err(PersistenceError::Parse(err)) => {
                tracing::error!(
                    "failed to parse inventory JSON from {}: {err}",
                    path.display()
                );
            }
            Err(err) => {
                tracing::error!(
                    "unexpected error while loading inventory from {}: {err}",
                    path.display()
                );
            }
        }
    }

    /// Write the current stock to `path` as pretty-printed JSON.
    ///
    /// Best-effort: failures are logged and not propagated, and the
    /// in-memory stock is never affected.
    pub fn save(&self, path: &Path) {
        match write_stock_file(path, self.stock()) {
            Ok(()) => {
                tracing::info!("saved {} item(s) to {}", self.len(), path.display());
            }
            Err(err) => {
                tracing::error!("failed to save inventory to {}: {err}", path.display());
            }
        }
    }
}

fn read_stock_file(path: &Path) -> Result<BTreeMap<String, i64>, PersistenceError> {
    let text = fs::read_to_string(path)?;
    let value: JsonValue = serde_json::from_str(&text)?;

    let JsonValue::Object(entries) = value else {
        return Err(PersistenceError::NotAnObject);
    };

    Ok(clean_entries(entries))
}

fn write_stock_file(path: &Path, stock: &BTreeMap<String, i64>) -> Result<(), PersistenceError> {
    let text = serde_json::to_string_pretty(stock)?;
    fs::write(path, text)?;
    Ok(())
}

/// Per-entry cleaning of a structurally valid inventory object.
///
/// Entries with an empty name are skipped; entries whose value cannot be
/// coerced to an integer default to 0. Both repairs warn instead of
/// aborting the load.
fn clean_entries(entries: serde_json::Map<String, JsonValue>) -> BTreeMap<String, i64> {
    let mut cleaned = BTreeMap::new();

    for (name, value) in entries {
        if name.is_empty() {
            tracing::warn!("skipping inventory entry with an empty item name");
            continue;
        }
        match coerce_quantity(&value) {
            Some(qty) => {
                cleaned.insert(name, qty);
            }
            None => {
                tracing::warn!("invalid quantity for {name}: {value}; defaulting to 0");
                cleaned.insert(name, 0);
            }
        }
    }

    cleaned
}

/// Interpret a JSON value as an integer quantity.
///
/// Integral numbers pass through; finite floats in `i64` range truncate
/// toward zero; strings parse as decimal integers after trimming;
/// booleans count as 1/0. Everything else is unconvertible.
fn coerce_quantity(value: &JsonValue) -> Option<i64> {
    match value {
        JsonValue::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        JsonValue::String(s) => s.trim().parse::<i64>().ok(),
        JsonValue::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}
