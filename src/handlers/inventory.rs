use super::{
    common::{created_response, json_body, no_content_response, success_response, ResourceId},
    AppState,
};
use crate::{
    entities::inventory,
    errors::ServiceError,
    services::inventory::{InventoryDetailRow, InventoryListRow, InventoryRecord, WarehouseInventoryRow},
    validators::{validate_inventory, InventoryPayload},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of a successful `POST /inventories`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InventoryCreatedResponse {
    pub message: String,
    pub item: InventoryRecord,
}

/// Body of a successful `PUT /inventories/:id`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InventoryUpdatedResponse {
    pub message: String,
    pub item: inventory::Model,
}

pub fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/inventories", get(list_inventories).post(create_inventory))
        .route(
            "/inventories/:id",
            get(get_inventory)
                .put(update_inventory)
                .delete(delete_inventory),
        )
        .route("/warehouses/:id/inventories", get(list_warehouse_inventories))
}

/// List every inventory item with its warehouse name
#[utoipa::path(
    get,
    path = "/inventories",
    responses(
        (status = 200, description = "Inventory list returned", body = [InventoryListRow]),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "Inventory"
)]
pub async fn list_inventories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let items = state.services.inventory.list_all().await?;
    Ok(success_response(items))
}

/// Get one inventory item
#[utoipa::path(
    get,
    path = "/inventories/{id}",
    params(("id" = i32, Path, description = "Inventory item ID")),
    responses(
        (status = 200, description = "Inventory item returned", body = InventoryDetailRow),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "Inventory"
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<impl IntoResponse, ServiceError> {
    let item = state.services.inventory.get_by_id(id).await?;
    Ok(success_response(item))
}

/// Create an inventory item
#[utoipa::path(
    post,
    path = "/inventories",
    request_body = InventoryPayload,
    responses(
        (status = 201, description = "Inventory item created", body = InventoryCreatedResponse),
        (status = 400, description = "Invalid payload or unknown warehouse", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "Inventory"
)]
pub async fn create_inventory(
    State(state): State<AppState>,
    payload: Result<Json<InventoryPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let input = validate_inventory(&json_body(payload)?)?;

    let item = state
        .services
        .inventory
        .create_item(input)
        .await
        .map_err(|e| e.context("Error occurred while creating a new inventory item."))?;

    Ok(created_response(InventoryCreatedResponse {
        message: "Successfully posted a new item in the inventory.".to_string(),
        item,
    }))
}

/// Replace an inventory item
#[utoipa::path(
    put,
    path = "/inventories/{id}",
    params(("id" = i32, Path, description = "Inventory item ID")),
    request_body = InventoryPayload,
    responses(
        (status = 200, description = "Inventory item updated", body = InventoryUpdatedResponse),
        (status = 400, description = "Invalid payload or unknown warehouse", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "Inventory"
)]
pub async fn update_inventory(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    payload: Result<Json<InventoryPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let input = validate_inventory(&json_body(payload)?)?;

    let item = state
        .services
        .inventory
        .update_item(id, input)
        .await
        .map_err(|e| e.context("Error occurred while updating the inventory item."))?;

    Ok(success_response(InventoryUpdatedResponse {
        message: "Successfully updated the inventory item.".to_string(),
        item,
    }))
}

/// Delete an inventory item
#[utoipa::path(
    delete,
    path = "/inventories/{id}",
    params(("id" = i32, Path, description = "Inventory item ID")),
    responses(
        (status = 204, description = "Inventory item deleted"),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "Inventory"
)]
pub async fn delete_inventory(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<impl IntoResponse, ServiceError> {
    state
        .services
        .inventory
        .delete_item(id)
        .await
        .map_err(|e| e.context("Unable to delete inventory"))?;

    Ok(no_content_response())
}

/// List the items stocked by one warehouse
#[utoipa::path(
    get,
    path = "/warehouses/{id}/inventories",
    params(("id" = i32, Path, description = "Warehouse ID")),
    responses(
        (status = 200, description = "Warehouse inventory returned", body = [WarehouseInventoryRow]),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Warehouse not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "Inventory"
)]
pub async fn list_warehouse_inventories(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<impl IntoResponse, ServiceError> {
    let items = state
        .services
        .inventory
        .list_by_warehouse(id)
        .await
        .map_err(|e| e.context("Error occurred while fetching inventories."))?;

    Ok(success_response(items))
}
