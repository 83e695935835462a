use crate::errors::ServiceError;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequestParts, Path},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Standard created response
pub fn created_response<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

/// Standard no content response
pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Unwraps a JSON body, turning malformed input into a 400.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ServiceError> {
    payload.map(|Json(body)| body).map_err(ServiceError::from)
}

/// Integer `:id` path segment.
///
/// Only canonical decimal integers are accepted: an optional `-` followed by
/// digits, with no sign `+` and no surrounding whitespace. Ids are 32-bit
/// columns, so values outside `i32` are rejected too. Every rejection is
/// `400 Invalid id: <value>` before the handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ServiceError::BadRequest(rejection.body_text()))?;

        parse_resource_id(&raw)
            .map(ResourceId)
            .ok_or_else(|| ServiceError::BadRequest(format!("Invalid id: {}", raw)))
    }
}

fn parse_resource_id(raw: &str) -> Option<i32> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<i32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use rstest::rstest;
    use tower::ServiceExt;

    #[rstest]
    #[case("42", Some(42))]
    #[case("0", Some(0))]
    #[case("-1", Some(-1))]
    #[case("+1", None)]
    #[case(" 1", None)]
    #[case("1 ", None)]
    #[case("-", None)]
    #[case("", None)]
    #[case("1.0", None)]
    #[case("2147483648", None)]
    fn only_canonical_integers_are_ids(#[case] raw: &str, #[case] expected: Option<i32>) {
        assert_eq!(parse_resource_id(raw), expected);
    }

    async fn echo(ResourceId(id): ResourceId) -> String {
        id.to_string()
    }

    fn router() -> Router {
        Router::new().route("/items/:id", get(echo))
    }

    #[tokio::test]
    async fn numeric_ids_are_extracted() {
        let response = router()
            .oneshot(Request::get("/items/42").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"42");
    }

    #[tokio::test]
    async fn non_numeric_ids_are_bad_requests() {
        let response = router()
            .oneshot(Request::get("/items/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Invalid id: abc");
    }

    #[tokio::test]
    async fn encoded_whitespace_is_not_an_alias() {
        let response = router()
            .oneshot(Request::get("/items/%201").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Invalid id:  1");
    }
}
