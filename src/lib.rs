//! InStock API Library
//!
//! Warehouses and their inventory items over a small REST surface
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod middleware_helpers;
pub mod migrator;
pub mod openapi;
pub mod services;
pub mod tracing;
pub mod validators;

use axum::Router;

pub use handlers::{AppServices, AppState};

/// Resource routes without state or middleware
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(handlers::warehouses::warehouse_routes())
        .merge(handlers::inventory::inventory_routes())
}

/// Full application router: resources, health probes, API docs, request ids
/// and HTTP tracing. CORS is layered on by the binary from configuration.
pub fn app_router(state: AppState) -> Router {
    handlers::health::init_start_time();

    Router::new()
        .merge(api_routes())
        .merge(handlers::health::health_routes())
        .merge(openapi::swagger_ui())
        .layer(crate::tracing::configure_http_tracing())
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id::request_id_middleware,
        ))
        .with_state(state)
}
