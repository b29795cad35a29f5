//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: division registry wiring (seed data, backends, init hooks)
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Handlers read the client address, so serve it with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    // Session-scoped routes: need the registry and a session context.
    let session_scoped = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn(middleware::session_middleware));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(session_scoped)
        .layer(ServiceBuilder::new())
}
