//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: shared state (the customer store behind its lock)
//! - `routes/`: HTTP routes + handlers (one file per concern)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
///
/// Each call constructs an independent store, so tests can run servers in
/// parallel without sharing state.
pub fn build_app() -> Router {
    let services = Arc::new(services::AppServices::new());

    Router::new()
        .route("/", get(routes::system::service_info))
        .nest("/customers", routes::customers::router())
        .fallback(routes::system::route_not_found)
        .layer(Extension(services))
        .layer(ServiceBuilder::new())
}
