use axum::{routing::get, Router};

pub mod account;
pub mod credit;
pub mod system;

/// Router for all session-scoped endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/divisions", get(system::divisions))
        .route("/session", get(system::session))
        .route("/credit", get(credit::credit))
        .route("/account", get(account::account_details))
}
