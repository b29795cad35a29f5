use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use dormnet_divisions::{RequestContext, SessionContext, current_user};

use crate::app::errors;
use crate::app::services::AppServices;

/// Overview of the caller's account: address, devices, ledger and traffic.
pub async fn account_details(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> axum::response::Response {
    let ctx = RequestContext::new(session, addr.ip());

    let user = match current_user(services.registry(), &ctx) {
        Ok(Some(user)) => user,
        Ok(None) => {
            return errors::json_error(
                StatusCode::NOT_FOUND,
                "not_recognized",
                "no account for this session or address",
            );
        }
        Err(e) => return errors::backend_error_to_response(e),
    };

    match user.account_details() {
        Ok(Some(details)) => (StatusCode::OK, Json(details)).into_response(),
        Ok(None) => errors::json_error(
            StatusCode::NOT_IMPLEMENTED,
            "unsupported",
            format!("division {} does not provide account details", user.division().name()),
        ),
        Err(e) => errors::backend_error_to_response(e),
    }
}
