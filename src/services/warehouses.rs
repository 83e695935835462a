use crate::{db::DbPool, entities::warehouse, errors::ServiceError, validators::WarehouseInput};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use tracing::{info, instrument};

fn not_found(id: i32) -> ServiceError {
    ServiceError::NotFound(format!("Warehouse with ID {} not found.", id))
}

/// Service for managing warehouses
#[derive(Clone)]
pub struct WarehouseService {
    db_pool: Arc<DbPool>,
}

impl WarehouseService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<warehouse::Model>, ServiceError> {
        let db = &*self.db_pool;
        let warehouses = warehouse::Entity::find()
            .order_by_asc(warehouse::Column::Id)
            .all(db)
            .await?;
        Ok(warehouses)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<warehouse::Model, ServiceError> {
        let db = &*self.db_pool;
        warehouse::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| not_found(id))
    }

    #[instrument(skip(self))]
    pub async fn create(&self, input: WarehouseInput) -> Result<warehouse::Model, ServiceError> {
        let db = &*self.db_pool;
        let now = Utc::now();
        let created = warehouse::ActiveModel {
            warehouse_name: Set(input.warehouse_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!(warehouse_id = created.id, "Warehouse created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: i32,
        input: WarehouseInput,
    ) -> Result<warehouse::Model, ServiceError> {
        let db = &*self.db_pool;
        let existing = warehouse::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| not_found(id))?;

        let mut active: warehouse::ActiveModel = existing.into();
        active.warehouse_name = Set(input.warehouse_name);
        active.updated_at = Set(Utc::now());
        let updated = active.update(db).await?;

        info!(warehouse_id = id, "Warehouse updated");
        Ok(updated)
    }

    /// Deletes a warehouse; its inventory rows go with it (ON DELETE CASCADE).
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let db = &*self.db_pool;
        let result = warehouse::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(not_found(id));
        }

        info!(warehouse_id = id, "Warehouse deleted");
        Ok(())
    }
}
