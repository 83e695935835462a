use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::error::DbErr;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message returned when an inventory write references an unknown warehouse.
pub const MISSING_WAREHOUSE_MESSAGE: &str = "The provided warehouse_id does not exist.";

/// Generic message for database failures that reach a response without context.
const GENERIC_FAILURE_MESSAGE: &str = "Error occurred";

fn current_request_id() -> Option<String> {
    crate::tracing::current_request_id().map(|rid| rid.as_str().to_string())
}

/// JSON body of every non-2xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "message": "Inventory item not found",
    "status": 404,
    "request_id": "5d0f2a2c-8a6e-4c55-9a41-3e1f8f5f3a2b"
}))]
pub struct ErrorResponse {
    /// Human-readable error description
    pub message: String,
    /// HTTP status code, repeated in the body
    pub status: u16,
    /// Raw failure detail, only present on 500 responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Request identifier for correlating logs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("{}", MISSING_WAREHOUSE_MESSAGE)]
    MissingWarehouse,

    #[error("{0}")]
    BadRequest(String),

    #[error("{message}: {detail}")]
    Internal { message: String, detail: String },
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::ValidationError(rejection.body_text())
    }
}

impl ServiceError {
    /// Attaches an operation-specific message to unexpected failures.
    ///
    /// Client errors (400/404) pass through unchanged so their messages reach
    /// the caller as-is.
    pub fn context(self, message: impl Into<String>) -> Self {
        match self {
            ServiceError::DatabaseError(err) => ServiceError::Internal {
                message: message.into(),
                detail: err.to_string(),
            },
            ServiceError::Internal { detail, .. } => ServiceError::Internal {
                message: message.into(),
                detail,
            },
            other => other,
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ValidationError(_) | Self::MissingWarehouse | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::DatabaseError(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The `message` field of the response body.
    pub fn response_message(&self) -> String {
        match self {
            Self::DatabaseError(_) => GENERIC_FAILURE_MESSAGE.to_string(),
            Self::Internal { message, .. } => message.clone(),
            _ => self.to_string(),
        }
    }

    /// Raw failure detail echoed to the caller on 500 responses.
    pub fn error_detail(&self) -> Option<String> {
        match self {
            Self::DatabaseError(err) => Some(err.to_string()),
            Self::Internal { detail, .. } => Some(detail.clone()),
            _ => None,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.response_message();
        let error = self.error_detail();

        if status.is_server_error() {
            tracing::error!(
                status = status.as_u16(),
                error = error.as_deref().unwrap_or_default(),
                "{}",
                message
            );
        } else {
            tracing::debug!(status = status.as_u16(), "{}", message);
        }

        let body = ErrorResponse {
            message,
            status: status.as_u16(),
            error,
            request_id: current_request_id(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> ErrorResponse {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn service_error_response_includes_request_id() {
        let response =
            crate::tracing::scope_request_id(crate::tracing::RequestId::new("req-123"), async {
                ServiceError::NotFound("Inventory item not found".into()).into_response()
            })
            .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let payload = body_of(response).await;
        assert_eq!(payload.request_id.as_deref(), Some("req-123"));
        assert_eq!(payload.message, "Inventory item not found");
        assert_eq!(payload.status, 404);
        assert!(payload.error.is_none());
    }

    #[test]
    fn service_error_status_code_mapping() {
        assert_eq!(
            ServiceError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::ValidationError("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::MissingWarehouse.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::DatabaseError(DbErr::Custom("boom".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn client_errors_report_their_own_message() {
        assert_eq!(
            ServiceError::MissingWarehouse.response_message(),
            MISSING_WAREHOUSE_MESSAGE
        );
        assert_eq!(
            ServiceError::ValidationError("quantity must be a non-negative integer".into())
                .response_message(),
            "quantity must be a non-negative integer"
        );
    }

    #[test]
    fn context_only_rewrites_unexpected_failures() {
        let err = ServiceError::DatabaseError(DbErr::Custom("disk full".into()))
            .context("Error occurred while creating a new inventory item.");
        assert_eq!(
            err.response_message(),
            "Error occurred while creating a new inventory item."
        );
        assert!(err.error_detail().unwrap().contains("disk full"));

        let err = ServiceError::NotFound("Inventory item not found".into()).context("ignored");
        assert_eq!(err.response_message(), "Inventory item not found");
        assert!(err.error_detail().is_none());
    }

    #[tokio::test]
    async fn internal_errors_echo_raw_detail() {
        let response = ServiceError::DatabaseError(DbErr::Custom("connection reset".into()))
            .context("Error occurred while fetching inventories.")
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let payload = body_of(response).await;
        assert_eq!(payload.message, "Error occurred while fetching inventories.");
        assert_eq!(payload.status, 500);
        assert!(payload.error.unwrap().contains("connection reset"));
    }
}
