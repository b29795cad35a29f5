//! Session context carried in from the upstream session layer.
//!
//! Login and session handling happen in front of this service; it only reads
//! the result from request headers.

use axum::http::HeaderMap;

use dormnet_divisions::{Locale, SessionContext};

/// Division selected for the session.
pub const DIVISION_HEADER: &str = "x-division";

/// Login name of the authenticated user, if the session is authenticated.
pub const IDENTITY_HEADER: &str = "x-authenticated-user";

fn header_value<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Build the session context from request headers. Missing or malformed
/// headers are treated as absent.
pub fn session_from_headers(headers: &HeaderMap) -> SessionContext {
    let mut session = SessionContext::new();

    if let Some(division) = header_value(headers, DIVISION_HEADER) {
        session = session.with_division(division);
    }
    if let Some(identity) = header_value(headers, IDENTITY_HEADER) {
        session = session.with_identity(identity);
    }
    if let Some(lang) = header_value(headers, axum::http::header::ACCEPT_LANGUAGE.as_str()) {
        session = session.with_locale(Locale::from_accept_language(lang));
    }

    session
}
