use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use custdir_core::CustomerId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route(
            "/:id",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .route("/status/:status", get(list_by_status))
        .route("/search/:query", get(search_customers))
}

pub async fn list_customers(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let store = match services.customers() {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let data = store.list();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "count": data.len(),
            "data": data,
        })),
    )
        .into_response()
}

pub async fn get_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let store = match services.customers() {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match store.get(&CustomerId::from(id)) {
        Ok(record) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "customer": dto::customer_to_json(&record),
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateCustomerRequest>,
) -> axum::response::Response {
    let mut store = match services.customers() {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match store.create(body.into_input()) {
        Ok(record) => {
            tracing::info!(id = %record.id, "customer created");
            (
                StatusCode::CREATED,
                Json(serde_json::json!({
                    "success": true,
                    "message": "customer created",
                    "customer": dto::customer_to_json(&record),
                })),
            )
                .into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateCustomerRequest>,
) -> axum::response::Response {
    let mut store = match services.customers() {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match store.update(&CustomerId::from(id), body.into_patch()) {
        Ok(record) => {
            tracing::info!(id = %record.id, "customer updated");
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "success": true,
                    "message": "customer updated",
                    "customer": dto::customer_to_json(&record),
                })),
            )
                .into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let mut store = match services.customers() {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match store.delete(&CustomerId::from(id)) {
        Ok(record) => {
            tracing::info!(id = %record.id, "customer deleted");
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "success": true,
                    "message": "customer deleted",
                    "customer": dto::customer_to_json(&record),
                })),
            )
                .into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_by_status(
    Extension(services): Extension<Arc<AppServices>>,
    Path(status): Path<String>,
) -> axum::response::Response {
    let store = match services.customers() {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    // Unknown statuses are not an error; they just match nothing.
    let data = store.list_by_status(&status);

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "count": data.len(),
            "status": status,
            "data": data,
        })),
    )
        .into_response()
}

pub async fn search_customers(
    Extension(services): Extension<Arc<AppServices>>,
    Path(query): Path<String>,
) -> axum::response::Response {
    let store = match services.customers() {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let data = store.search(&query);

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "count": data.len(),
            "query": query,
            "data": data,
        })),
    )
        .into_response()
}
