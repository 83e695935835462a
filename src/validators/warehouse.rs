use super::{require_fields, text_field, text_length_message};
use crate::errors::ServiceError;
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

/// Warehouse fields as received on `POST`/`PUT /warehouses`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[schema(example = json!({ "warehouse_name": "Manhattan" }))]
pub struct WarehousePayload {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub warehouse_name: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct WarehouseInput {
    #[validate(length(min = 1, max = 255))]
    pub warehouse_name: String,
}

pub fn validate_warehouse(payload: &WarehousePayload) -> Result<WarehouseInput, ServiceError> {
    require_fields(&[("warehouse_name", &payload.warehouse_name)])?;

    let input = WarehouseInput {
        warehouse_name: text_field("warehouse_name", &payload.warehouse_name)?,
    };

    input.validate().map_err(|_| {
        ServiceError::ValidationError(text_length_message(
            "warehouse_name",
            &input.warehouse_name,
        ))
    })?;

    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate(body: Value) -> Result<WarehouseInput, ServiceError> {
        validate_warehouse(&serde_json::from_value(body).unwrap())
    }

    #[test]
    fn accepts_and_trims_name() {
        let input = validate(json!({ "warehouse_name": " Brooklyn " })).unwrap();
        assert_eq!(input.warehouse_name, "Brooklyn");
    }

    #[test]
    fn rejects_missing_blank_and_non_string_names() {
        assert_eq!(
            validate(json!({})).unwrap_err().to_string(),
            "Missing required field(s): warehouse_name"
        );
        assert_eq!(
            validate(json!({ "warehouse_name": "  " })).unwrap_err().to_string(),
            "warehouse_name must be a non-empty string"
        );
        assert_eq!(
            validate(json!({ "warehouse_name": 5 })).unwrap_err().to_string(),
            "warehouse_name must be a non-empty string"
        );
    }
}
