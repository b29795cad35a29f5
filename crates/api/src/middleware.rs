use axum::{extract::Request, middleware::Next, response::Response};

use crate::context::session_from_headers;

/// Attach a [`dormnet_divisions::SessionContext`] to every request.
pub async fn session_middleware(mut req: Request, next: Next) -> Response {
    let session = session_from_headers(req.headers());

    tracing::debug!(
        division = ?session.division_name(),
        authenticated = session.is_authenticated(),
        "session attached"
    );

    req.extensions_mut().insert(session);
    next.run(req).await
}
