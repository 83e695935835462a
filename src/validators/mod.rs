//! Payload validation for write requests.
//!
//! Request bodies are deserialized loosely (every field optional, any JSON
//! type) so that a missing field or a wrongly typed value produces a
//! readable 400 message instead of a serde rejection. The validators turn a
//! loose payload into a typed, trimmed input or a `ServiceError::ValidationError`.

pub mod inventory;
pub mod warehouse;

pub use inventory::{validate_inventory, InventoryInput, InventoryPayload};
pub use warehouse::{validate_warehouse, WarehouseInput, WarehousePayload};

use crate::errors::ServiceError;
use serde_json::Value;

/// Widest text accepted for `string_len(255)` columns.
pub const MAX_TEXT_LEN: usize = 255;

/// Reports every absent field at once, in declaration order.
pub(crate) fn require_fields(fields: &[(&str, &Option<Value>)]) -> Result<(), ServiceError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::ValidationError(format!(
            "Missing required field(s): {}",
            missing.join(", ")
        )))
    }
}

/// Accepts a JSON string and returns it trimmed; length is checked later.
pub(crate) fn text_field(name: &str, value: &Option<Value>) -> Result<String, ServiceError> {
    match value {
        Some(Value::String(s)) => Ok(s.trim().to_string()),
        _ => Err(ServiceError::ValidationError(format!(
            "{} must be a non-empty string",
            name
        ))),
    }
}

/// Accepts a JSON integer, a whole-number float such as `100.0`, or a
/// string holding an integer.
pub(crate) fn integer_field(value: &Option<Value>) -> Option<i32> {
    let wide = match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| whole_float(n.as_f64()?)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    }?;
    i32::try_from(wide).ok()
}

fn whole_float(value: f64) -> Option<i64> {
    let in_range = value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX);
    (value.fract() == 0.0 && in_range).then_some(value as i64)
}

/// Message for a text field that failed its `length` rule.
pub(crate) fn text_length_message(name: &str, value: &str) -> String {
    if value.is_empty() {
        format!("{} must be a non-empty string", name)
    } else {
        format!("{} must be at most {} characters", name, MAX_TEXT_LEN)
    }
}
