#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use instock_api::{config::AppConfig, db, AppState};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

/// Helper harness for spinning up the application against a throwaway SQLite file.
pub struct TestApp {
    router: Router,
    pub state: AppState,
    _db_dir: TempDir,
}

impl TestApp {
    /// Construct a new test application with a fresh, migrated database.
    pub async fn new() -> Self {
        let db_dir = tempfile::tempdir().expect("create temp dir");
        let db_path = db_dir.path().join("instock_test.db");

        let mut cfg = AppConfig::new(
            format!("sqlite://{}?mode=rwc", db_path.display()),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = AppState::new(Arc::new(pool), cfg);
        let router = instock_api::app_router(state.clone());

        Self {
            router,
            state,
            _db_dir: db_dir,
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.router
            .clone()
            .oneshot(builder.body(body).expect("build request"))
            .await
            .expect("router response")
    }

    /// Sends a raw, possibly malformed, JSON body.
    pub async fn request_raw(&self, method: Method, uri: &str, raw: &'static str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(raw))
            .expect("build request");

        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router response")
    }

    pub async fn create_warehouse(&self, name: &str) -> i64 {
        let response = self
            .request(
                Method::POST,
                "/warehouses",
                Some(json!({ "warehouse_name": name })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = response_json(response).await;
        body["warehouse"]["id"].as_i64().expect("warehouse id")
    }

    pub async fn create_item(&self, warehouse_id: i64, item_name: &str, quantity: i64) -> i64 {
        let response = self
            .request(
                Method::POST,
                "/inventories",
                Some(item_payload(warehouse_id, item_name, quantity)),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = response_json(response).await;
        body["item"]["id"].as_i64().expect("item id")
    }
}

pub fn item_payload(warehouse_id: i64, item_name: &str, quantity: i64) -> Value {
    json!({
        "warehouse_id": warehouse_id,
        "item_name": item_name,
        "description": format!("{} description", item_name),
        "category": "hardware",
        "status": "in_stock",
        "quantity": quantity
    })
}

pub async fn response_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes");
    serde_json::from_slice(&bytes).expect("json response")
}

pub async fn response_bytes(response: Response) -> body::Bytes {
    body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes")
}
