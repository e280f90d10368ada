use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Json;

/// Resource paths this service answers, echoed on `/` and on unknown routes.
pub const AVAILABLE_ENDPOINTS: &[&str] = &[
    "GET /",
    "GET /customers",
    "GET /customers/:id",
    "POST /customers",
    "PUT /customers/:id",
    "DELETE /customers/:id",
    "GET /customers/status/:status",
    "GET /customers/search/:query",
];

/// `GET /` — service metadata plus the endpoint catalog.
pub async fn service_info() -> impl IntoResponse {
    Json(serde_json::json!({
        "success": true,
        "service": "custdir",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": AVAILABLE_ENDPOINTS,
    }))
}

/// Fallback for any path outside the catalog.
pub async fn route_not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!(path = %uri.path(), "unknown route");
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "success": false,
            "message": format!("no route for {}", uri.path()),
            "availableEndpoints": AVAILABLE_ENDPOINTS,
        })),
    )
}
