use crate::{
    db::DbPool,
    entities::{inventory, warehouse},
    errors::ServiceError,
    services::warehouse_exists,
    validators::InventoryInput,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect, Set, SqlErr, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;

pub const ITEM_NOT_FOUND_MESSAGE: &str = "Inventory item not found";

/// One row of `GET /inventories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct InventoryListRow {
    pub id: i32,
    pub warehouse_name: String,
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub quantity: i32,
}

/// `GET /inventories/:id`: the list row plus the owning warehouse id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct InventoryDetailRow {
    pub id: i32,
    pub warehouse_id: i32,
    pub warehouse_name: String,
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub quantity: i32,
}

/// One row of `GET /warehouses/:id/inventories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct WarehouseInventoryRow {
    pub id: i32,
    pub item_name: String,
    pub category: String,
    pub status: String,
    pub quantity: i32,
}

/// A freshly inserted item, without timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InventoryRecord {
    pub id: i32,
    pub warehouse_id: i32,
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub quantity: i32,
}

impl From<inventory::Model> for InventoryRecord {
    fn from(model: inventory::Model) -> Self {
        Self {
            id: model.id,
            warehouse_id: model.warehouse_id,
            item_name: model.item_name,
            description: model.description,
            category: model.category,
            status: model.status,
            quantity: model.quantity,
        }
    }
}

/// A foreign-key violation on an inventory write can only mean the
/// referenced warehouse is gone.
pub(crate) fn map_write_error(err: DbErr) -> ServiceError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => ServiceError::MissingWarehouse,
        _ => ServiceError::DatabaseError(err),
    }
}

/// Service for reading and writing inventory items
#[derive(Clone)]
pub struct InventoryService {
    db_pool: Arc<DbPool>,
}

impl InventoryService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Lists every item joined with its warehouse name
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<InventoryListRow>, ServiceError> {
        let db = &*self.db_pool;
        let rows = inventory::Entity::find()
            .select_only()
            .column(inventory::Column::Id)
            .column(warehouse::Column::WarehouseName)
            .column(inventory::Column::ItemName)
            .column(inventory::Column::Description)
            .column(inventory::Column::Category)
            .column(inventory::Column::Status)
            .column(inventory::Column::Quantity)
            .inner_join(warehouse::Entity)
            .order_by_asc(inventory::Column::Id)
            .into_model::<InventoryListRow>()
            .all(db)
            .await?;

        Ok(rows)
    }

    /// Gets a single item joined with its warehouse
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> Result<InventoryDetailRow, ServiceError> {
        let db = &*self.db_pool;
        inventory::Entity::find()
            .select_only()
            .column(inventory::Column::Id)
            .column(inventory::Column::WarehouseId)
            .column(warehouse::Column::WarehouseName)
            .column(inventory::Column::ItemName)
            .column(inventory::Column::Description)
            .column(inventory::Column::Category)
            .column(inventory::Column::Status)
            .column(inventory::Column::Quantity)
            .inner_join(warehouse::Entity)
            .filter(inventory::Column::Id.eq(id))
            .into_model::<InventoryDetailRow>()
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(ITEM_NOT_FOUND_MESSAGE.to_string()))
    }

    /// Inserts a new item after confirming its warehouse exists
    #[instrument(skip(self))]
    pub async fn create_item(&self, input: InventoryInput) -> Result<InventoryRecord, ServiceError> {
        let txn = self.db_pool.begin().await?;

        if !warehouse_exists(&txn, input.warehouse_id).await? {
            return Err(ServiceError::MissingWarehouse);
        }

        let now = Utc::now();
        let item = inventory::ActiveModel {
            warehouse_id: Set(input.warehouse_id),
            item_name: Set(input.item_name),
            description: Set(input.description),
            category: Set(input.category),
            status: Set(input.status),
            quantity: Set(input.quantity),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(map_write_error)?;

        txn.commit().await?;

        info!(item_id = item.id, warehouse_id = item.warehouse_id, "Inventory item created");
        Ok(item.into())
    }

    /// Overwrites every mutable field of an existing item
    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: i32,
        input: InventoryInput,
    ) -> Result<inventory::Model, ServiceError> {
        let txn = self.db_pool.begin().await?;

        if !warehouse_exists(&txn, input.warehouse_id).await? {
            return Err(ServiceError::MissingWarehouse);
        }

        let existing = inventory::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::NotFound(ITEM_NOT_FOUND_MESSAGE.to_string()))?;

        let mut item: inventory::ActiveModel = existing.into();
        item.warehouse_id = Set(input.warehouse_id);
        item.item_name = Set(input.item_name);
        item.description = Set(input.description);
        item.category = Set(input.category);
        item.status = Set(input.status);
        item.quantity = Set(input.quantity);
        item.updated_at = Set(Utc::now());

        let updated = item.update(&txn).await.map_err(map_write_error)?;
        txn.commit().await?;

        info!(item_id = updated.id, "Inventory item updated");
        Ok(updated)
    }

    /// Hard-deletes an item
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: i32) -> Result<(), ServiceError> {
        let db = &*self.db_pool;
        let result = inventory::Entity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "Inventory with ID {} not found",
                id
            )));
        }

        info!(item_id = id, "Inventory item deleted");
        Ok(())
    }

    /// Lists the items stocked by one warehouse
    #[instrument(skip(self))]
    pub async fn list_by_warehouse(
        &self,
        warehouse_id: i32,
    ) -> Result<Vec<WarehouseInventoryRow>, ServiceError> {
        let db = &*self.db_pool;

        if !warehouse_exists(db, warehouse_id).await? {
            return Err(ServiceError::NotFound(format!(
                "Warehouse with ID {} not found.",
                warehouse_id
            )));
        }

        let rows = inventory::Entity::find()
            .select_only()
            .column(inventory::Column::Id)
            .column(inventory::Column::ItemName)
            .column(inventory::Column::Category)
            .column(inventory::Column::Status)
            .column(inventory::Column::Quantity)
            .filter(inventory::Column::WarehouseId.eq(warehouse_id))
            .order_by_asc(inventory::Column::Id)
            .into_model::<WarehouseInventoryRow>()
            .all(db)
            .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{establish_connection_with_config, run_migrations, DbConfig};
    use assert_matches::assert_matches;
    use sea_orm::RuntimeErr;

    async fn migrated_pool() -> DbPool {
        let config = DbConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            ..Default::default()
        };
        let pool = establish_connection_with_config(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    fn orphan_item(warehouse_id: i32) -> inventory::ActiveModel {
        let now = Utc::now();
        inventory::ActiveModel {
            warehouse_id: Set(warehouse_id),
            item_name: Set("Bolt".into()),
            description: Set("M6".into()),
            category: Set("hardware".into()),
            status: Set("in_stock".into()),
            quantity: Set(1),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn foreign_key_violation_on_insert_maps_to_missing_warehouse() {
        let pool = migrated_pool().await;

        let err = orphan_item(999).insert(&pool).await.unwrap_err();
        assert_matches!(
            err.sql_err(),
            Some(SqlErr::ForeignKeyConstraintViolation(_))
        );
        assert_matches!(map_write_error(err), ServiceError::MissingWarehouse);

        let count = inventory::Entity::find().all(&pool).await.unwrap().len();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn foreign_key_violation_on_update_maps_to_missing_warehouse() {
        let pool = migrated_pool().await;
        let now = Utc::now();
        let home = warehouse::ActiveModel {
            warehouse_name: Set("Manhattan".into()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&pool)
        .await
        .unwrap();
        let item = orphan_item(home.id).insert(&pool).await.unwrap();

        let mut moved: inventory::ActiveModel = item.into();
        moved.warehouse_id = Set(home.id + 1000);
        let err = moved.update(&pool).await.unwrap_err();
        assert_matches!(map_write_error(err), ServiceError::MissingWarehouse);
    }

    #[test]
    fn unrelated_database_errors_are_not_reported_as_missing_warehouse() {
        let err = map_write_error(DbErr::Custom("disk I/O error".into()));
        assert_matches!(err, ServiceError::DatabaseError(_));

        let err = map_write_error(DbErr::Exec(RuntimeErr::Internal("timeout".into())));
        assert_matches!(err, ServiceError::DatabaseError(_));
    }

    #[test]
    fn record_drops_timestamps() {
        let now = Utc::now();
        let model = inventory::Model {
            id: 4,
            warehouse_id: 2,
            item_name: "Bolt".into(),
            description: "M6".into(),
            category: "hardware".into(),
            status: "in_stock".into(),
            quantity: 10,
            created_at: now,
            updated_at: now,
        };
        let value = serde_json::to_value(InventoryRecord::from(model)).unwrap();
        assert!(value.get("created_at").is_none());
        assert_eq!(value["quantity"], 10);
        assert_eq!(value["warehouse_id"], 2);
    }
}
