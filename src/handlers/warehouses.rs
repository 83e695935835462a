use super::{
    common::{created_response, json_body, no_content_response, success_response, ResourceId},
    AppState,
};
use crate::{
    entities::warehouse,
    errors::ServiceError,
    validators::{validate_warehouse, WarehousePayload},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of a successful warehouse create or update
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WarehouseResponse {
    pub message: String,
    pub warehouse: warehouse::Model,
}

pub fn warehouse_routes() -> Router<AppState> {
    Router::new()
        .route("/warehouses", get(list_warehouses).post(create_warehouse))
        .route(
            "/warehouses/:id",
            get(get_warehouse)
                .put(update_warehouse)
                .delete(delete_warehouse),
        )
}

#[utoipa::path(
    get,
    path = "/warehouses",
    responses(
        (status = 200, description = "Warehouse list returned", body = [warehouse::Model]),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "Warehouses"
)]
pub async fn list_warehouses(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let warehouses = state
        .services
        .warehouses
        .list()
        .await
        .map_err(|e| e.context("Error occurred while fetching warehouses."))?;

    Ok(success_response(warehouses))
}

#[utoipa::path(
    get,
    path = "/warehouses/{id}",
    params(("id" = i32, Path, description = "Warehouse ID")),
    responses(
        (status = 200, description = "Warehouse returned", body = warehouse::Model),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "Warehouses"
)]
pub async fn get_warehouse(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<impl IntoResponse, ServiceError> {
    let warehouse = state.services.warehouses.get(id).await?;
    Ok(success_response(warehouse))
}

#[utoipa::path(
    post,
    path = "/warehouses",
    request_body = WarehousePayload,
    responses(
        (status = 201, description = "Warehouse created", body = WarehouseResponse),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "Warehouses"
)]
pub async fn create_warehouse(
    State(state): State<AppState>,
    payload: Result<Json<WarehousePayload>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let input = validate_warehouse(&json_body(payload)?)?;

    let warehouse = state
        .services
        .warehouses
        .create(input)
        .await
        .map_err(|e| e.context("Error occurred while creating a new warehouse."))?;

    Ok(created_response(WarehouseResponse {
        message: "Successfully created a new warehouse.".to_string(),
        warehouse,
    }))
}

#[utoipa::path(
    put,
    path = "/warehouses/{id}",
    params(("id" = i32, Path, description = "Warehouse ID")),
    request_body = WarehousePayload,
    responses(
        (status = 200, description = "Warehouse updated", body = WarehouseResponse),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "Warehouses"
)]
pub async fn update_warehouse(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    payload: Result<Json<WarehousePayload>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let input = validate_warehouse(&json_body(payload)?)?;

    let warehouse = state
        .services
        .warehouses
        .update(id, input)
        .await
        .map_err(|e| e.context("Error occurred while updating the warehouse."))?;

    Ok(success_response(WarehouseResponse {
        message: "Successfully updated the warehouse.".to_string(),
        warehouse,
    }))
}

/// Delete a warehouse and, through the foreign key, its inventory
#[utoipa::path(
    delete,
    path = "/warehouses/{id}",
    params(("id" = i32, Path, description = "Warehouse ID")),
    responses(
        (status = 204, description = "Warehouse deleted"),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "Warehouses"
)]
pub async fn delete_warehouse(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<impl IntoResponse, ServiceError> {
    state
        .services
        .warehouses
        .delete(id)
        .await
        .map_err(|e| e.context("Unable to delete warehouse"))?;

    Ok(no_content_response())
}
