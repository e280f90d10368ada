use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use custdir_core::DomainError;

/// Map a domain failure to its HTTP envelope.
///
/// Every envelope carries `success:false` plus a human-readable `message`;
/// conflicts and missing records additionally echo the id that matters to
/// the caller.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => (
            StatusCode::BAD_REQUEST,
            axum::Json(json!({
                "success": false,
                "message": msg,
            })),
        )
            .into_response(),
        DomainError::Conflict {
            message,
            existing_id,
        } => (
            StatusCode::CONFLICT,
            axum::Json(json!({
                "success": false,
                "message": message,
                "existingCustomerId": existing_id,
            })),
        )
            .into_response(),
        DomainError::NotFound { requested_id } => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({
                "success": false,
                "message": "customer not found",
                "requestedId": requested_id,
            })),
        )
            .into_response(),
    }
}

/// 500 envelope for faults that should never happen in normal operation
/// (e.g. a poisoned store lock). The fault is reported, never re-thrown.
pub fn internal_error(detail: impl Into<String>) -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({
            "success": false,
            "message": "internal server error",
            "error": detail.into(),
        })),
    )
        .into_response()
}
