use super::{integer_field, require_fields, text_field, text_length_message};
use crate::errors::ServiceError;
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

/// Inventory item fields as received on `POST`/`PUT /inventories`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[schema(example = json!({
    "warehouse_id": 1,
    "item_name": "Bolt",
    "description": "M6 hex bolt",
    "category": "hardware",
    "status": "in_stock",
    "quantity": 100
}))]
pub struct InventoryPayload {
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub warehouse_id: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub item_name: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub category: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub status: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub quantity: Option<Value>,
}

/// A validated inventory write; every mutable column of the row.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct InventoryInput {
    #[validate(range(min = 1))]
    pub warehouse_id: i32,
    #[validate(length(min = 1, max = 255))]
    pub item_name: String,
    #[validate(length(min = 1, max = 255))]
    pub description: String,
    #[validate(length(min = 1, max = 255))]
    pub category: String,
    #[validate(length(min = 1, max = 255))]
    pub status: String,
    #[validate(range(min = 0))]
    pub quantity: i32,
}

const WAREHOUSE_ID_MESSAGE: &str = "warehouse_id must be a positive integer";
const QUANTITY_MESSAGE: &str = "quantity must be a non-negative integer";

/// Checks an inventory payload and returns the trimmed, typed input.
pub fn validate_inventory(payload: &InventoryPayload) -> Result<InventoryInput, ServiceError> {
    require_fields(&[
        ("warehouse_id", &payload.warehouse_id),
        ("item_name", &payload.item_name),
        ("description", &payload.description),
        ("category", &payload.category),
        ("status", &payload.status),
        ("quantity", &payload.quantity),
    ])?;

    let input = InventoryInput {
        warehouse_id: integer_field(&payload.warehouse_id)
            .ok_or_else(|| ServiceError::ValidationError(WAREHOUSE_ID_MESSAGE.into()))?,
        item_name: text_field("item_name", &payload.item_name)?,
        description: text_field("description", &payload.description)?,
        category: text_field("category", &payload.category)?,
        status: text_field("status", &payload.status)?,
        quantity: integer_field(&payload.quantity)
            .ok_or_else(|| ServiceError::ValidationError(QUANTITY_MESSAGE.into()))?,
    };

    match input.validate() {
        Ok(()) => Ok(input),
        Err(errors) => {
            let failed = errors.field_errors();
            let message = if failed.contains_key("warehouse_id") {
                WAREHOUSE_ID_MESSAGE.to_string()
            } else if failed.contains_key("item_name") {
                text_length_message("item_name", &input.item_name)
            } else if failed.contains_key("description") {
                text_length_message("description", &input.description)
            } else if failed.contains_key("category") {
                text_length_message("category", &input.category)
            } else if failed.contains_key("status") {
                text_length_message("status", &input.status)
            } else {
                QUANTITY_MESSAGE.to_string()
            };
            Err(ServiceError::ValidationError(message))
        }
    }
}
