use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Extension},
    Json,
};

use dormnet_divisions::{CreditReport, RequestContext, SessionContext, query_balance};

use crate::app::services::AppServices;

/// Balance gauge data. Always `200`; failures are reported in the body.
pub async fn credit(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Json<CreditReport> {
    let ctx = RequestContext::new(session, addr.ip());
    Json(query_balance(services.registry(), &ctx))
}
