use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use dormnet_divisions::{SessionContext, current_capabilities};

use crate::app::services::AppServices;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Divisions a user can pick at login.
pub async fn divisions(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    let registry = services.registry();
    let items = registry
        .iter()
        .map(|d| {
            serde_json::json!({
                "name": d.name(),
                "display_name": d.display_name(),
            })
        })
        .collect::<Vec<_>>();

    Json(serde_json::json!({ "items": items, "debug": registry.debug_mode() }))
}

/// Division and features active for the caller's session.
pub async fn session(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> impl IntoResponse {
    let registry = services.registry();
    let division = registry.current_division(&session);

    Json(serde_json::json!({
        "division": division.map(|d| d.name()),
        "authenticated": session.is_authenticated(),
        "capabilities": current_capabilities(registry, &session),
    }))
}
