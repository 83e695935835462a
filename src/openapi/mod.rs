use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "InStock API",
        version = "1.0.0",
        description = r#"
# InStock Inventory API

CRUD over warehouses and the inventory items they stock.

## Error Handling

Every non-2xx response carries the same body:

```json
{
  "message": "Inventory item not found",
  "status": 404,
  "request_id": "5d0f2a2c-8a6e-4c55-9a41-3e1f8f5f3a2b"
}
```

500 responses also include the raw failure in `error`.
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "Inventory", description = "Inventory item endpoints"),
        (name = "Warehouses", description = "Warehouse endpoints")
    ),
    paths(
        // Inventory
        crate::handlers::inventory::list_inventories,
        crate::handlers::inventory::get_inventory,
        crate::handlers::inventory::create_inventory,
        crate::handlers::inventory::update_inventory,
        crate::handlers::inventory::delete_inventory,
        crate::handlers::inventory::list_warehouse_inventories,

        // Warehouses
        crate::handlers::warehouses::list_warehouses,
        crate::handlers::warehouses::get_warehouse,
        crate::handlers::warehouses::create_warehouse,
        crate::handlers::warehouses::update_warehouse,
        crate::handlers::warehouses::delete_warehouse,
    ),
    components(
        schemas(
            crate::entities::inventory::Model,
            crate::entities::warehouse::Model,
            crate::services::inventory::InventoryListRow,
            crate::services::inventory::InventoryDetailRow,
            crate::services::inventory::WarehouseInventoryRow,
            crate::services::inventory::InventoryRecord,
            crate::validators::InventoryPayload,
            crate::validators::WarehousePayload,
            crate::handlers::inventory::InventoryCreatedResponse,
            crate::handlers::inventory::InventoryUpdatedResponse,
            crate::handlers::warehouses::WarehouseResponse,
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_resource_route() {
        let json = serde_json::to_string(&ApiDoc::openapi()).unwrap();
        assert!(json.contains("InStock API"));
        for path in [
            "/inventories",
            "/inventories/{id}",
            "/warehouses",
            "/warehouses/{id}",
            "/warehouses/{id}/inventories",
        ] {
            assert!(json.contains(&format!("\"{}\"", path)), "missing {}", path);
        }
    }
}
