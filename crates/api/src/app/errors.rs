use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use dormnet_core::{BackendError, DomainError};

pub fn backend_error_to_response(err: BackendError) -> axum::response::Response {
    match err {
        BackendError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        BackendError::Unavailable(msg) => {
            tracing::warn!(reason = %msg, "backend unavailable");
            json_error(StatusCode::SERVICE_UNAVAILABLE, "backend_unavailable", msg)
        }
        BackendError::Domain(DomainError::InvariantViolation(msg)) => {
            tracing::error!(%msg, "data integrity violation");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "invariant_violation", msg)
        }
        BackendError::Domain(e) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "domain_error", e.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
