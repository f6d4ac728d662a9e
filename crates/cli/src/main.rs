use std::path::{Path, PathBuf};

use stockroom_core::InventoryError;
use stockroom_inventory::{
    ActivityLog, DEFAULT_INVENTORY_PATH, DEFAULT_LOW_STOCK_THRESHOLD, Inventory,
};

fn main() {
    stockroom_observability::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INVENTORY_PATH));

    if let Err(err) = run(&path) {
        tracing::error!("unhandled error: {err:?}");
        std::process::exit(1);
    }
}

/// Walk the inventory through the demo flow: load, receive stock, fulfil a
/// removal, report, persist.
///
/// `load` and `save` never abort the run; a `NotFound` removal is
/// downgraded to a warning here, every other domain error bubbles up.
fn run(path: &Path) -> anyhow::Result<()> {
    let mut inventory = Inventory::new();
    let mut activity = ActivityLog::new();

    inventory.load(path);

    inventory.add("apple", 10, Some(&mut activity))?;
    inventory.add("banana", 5, Some(&mut activity))?;

    match inventory.remove("apple", 3) {
        Ok(()) => {}
        Err(InventoryError::NotFound(name)) => {
            tracing::warn!("tried to remove {name}, which is not in the inventory");
        }
        Err(err) => return Err(err.into()),
    }

    println!("Apple stock: {}", inventory.quantity("apple")?);
    println!(
        "Low items: {:?}",
        inventory.low_stock(DEFAULT_LOW_STOCK_THRESHOLD)
    );

    inventory.save(path);
    print_report(&inventory);

    tracing::info!("activity log: {:?}", activity.entries());

    Ok(())
}

fn print_report(inventory: &Inventory) {
    println!("Items Report");
    for (name, qty) in inventory.items() {
        println!("{name} -> {qty}");
    }
}

