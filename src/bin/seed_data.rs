//! Seed data script - populates the database with demo warehouses and stock
//!
//! Run with: cargo run --bin seed-data
//!
//! Skips seeding when any warehouse already exists.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use instock_api::{
    config, db,
    services::{inventory::InventoryService, warehouses::WarehouseService},
    validators::{validate_inventory, validate_warehouse, InventoryPayload, WarehousePayload},
};

const WAREHOUSES: &[&str] = &["Manhattan", "Washington", "Jersey", "San Francisco"];

/// (warehouse index, item, description, category, status, quantity)
const ITEMS: &[(usize, &str, &str, &str, &str, i32)] = &[
    (0, "Television", "50-inch 4K smart television", "Electronics", "In Stock", 500),
    (0, "Gym Bag", "Water-resistant duffel with shoe compartment", "Gear", "Out of Stock", 0),
    (0, "Hoodie", "Cotton blend pullover hoodie", "Apparel", "In Stock", 1200),
    (1, "Keychain", "Brass keychain with logo engraving", "Accessories", "In Stock", 2000),
    (1, "Tent", "Four-person waterproof camping tent", "Gear", "In Stock", 320),
    (2, "Monitor", "27-inch IPS display", "Electronics", "In Stock", 75),
    (2, "Umbrella", "Compact windproof umbrella", "Accessories", "Out of Stock", 0),
    (3, "Winter Jacket", "Insulated jacket rated to -20C", "Apparel", "In Stock", 140),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = config::load_config()?;
    config::init_tracing(cfg.log_level(), cfg.log_json);

    info!("=== InStock API Seed Data ===");

    let pool = db::establish_connection_from_app_config(&cfg).await?;
    db::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let warehouses = WarehouseService::new(pool.clone());
    let inventory = InventoryService::new(pool.clone());

    if !warehouses.list().await?.is_empty() {
        info!("Warehouses already present; nothing to seed");
        return Ok(());
    }

    info!("Creating warehouses...");
    let mut warehouse_ids = Vec::with_capacity(WAREHOUSES.len());
    for name in WAREHOUSES {
        let payload: WarehousePayload = serde_json::from_value(json!({ "warehouse_name": name }))?;
        let created = warehouses.create(validate_warehouse(&payload)?).await?;
        warehouse_ids.push(created.id);
    }
    info!("  Created {} warehouses", warehouse_ids.len());

    info!("Creating inventory...");
    for (warehouse, item_name, description, category, status, quantity) in ITEMS {
        let payload: InventoryPayload = serde_json::from_value(json!({
            "warehouse_id": warehouse_ids[*warehouse],
            "item_name": item_name,
            "description": description,
            "category": category,
            "status": status,
            "quantity": quantity,
        }))?;
        inventory.create_item(validate_inventory(&payload)?).await?;
    }
    info!("  Created {} inventory items", ITEMS.len());

    info!("Try these API calls:");
    info!("  curl http://localhost:{}/warehouses", cfg.port);
    info!("  curl http://localhost:{}/inventories", cfg.port);
    info!("Or explore interactively at: http://localhost:{}/swagger-ui", cfg.port);

    Ok(())
}
