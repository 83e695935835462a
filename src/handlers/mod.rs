pub mod common;
pub mod health;
pub mod inventory;
pub mod warehouses;

use crate::{
    config::AppConfig,
    db::DbPool,
    services::{inventory::InventoryService, warehouses::WarehouseService},
};
use std::sync::Arc;

/// Services shared by every handler
#[derive(Clone)]
pub struct AppServices {
    pub inventory: InventoryService,
    pub warehouses: WarehouseService,
}

/// Application state handed to the router
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbPool>,
    pub config: AppConfig,
    pub services: AppServices,
}

impl AppState {
    pub fn new(db: Arc<DbPool>, config: AppConfig) -> Self {
        let services = AppServices {
            inventory: InventoryService::new(db.clone()),
            warehouses: WarehouseService::new(db.clone()),
        };
        Self {
            db,
            config,
            services,
        }
    }
}
