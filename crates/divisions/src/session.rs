//! Request-scoped context handed in by the surrounding request layer.

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// Language for user-facing messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    /// Pick the first supported language of an `Accept-Language` value.
    pub fn from_accept_language(header: &str) -> Self {
        header
            .split(',')
            .filter_map(|part| part.split(';').next())
            .map(|tag| tag.trim().to_lowercase())
            .find_map(|tag| match tag.split('-').next() {
                Some("de") => Some(Locale::De),
                Some("en") => Some(Locale::En),
                _ => None,
            })
            .unwrap_or_default()
    }
}

/// Read-only session data: selected division and authenticated identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    division: Option<String>,
    identity: Option<String>,
    locale: Locale,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_division(mut self, name: impl Into<String>) -> Self {
        self.division = Some(name.into());
        self
    }

    /// Login name of the authenticated user, as vouched for by the session layer.
    pub fn with_identity(mut self, login: impl Into<String>) -> Self {
        self.identity = Some(login.into());
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn division_name(&self) -> Option<&str> {
        self.division.as_deref()
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}

/// Session plus the caller's network address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    session: SessionContext,
    remote_addr: IpAddr,
}

impl RequestContext {
    pub fn new(session: SessionContext, remote_addr: IpAddr) -> Self {
        Self {
            session,
            remote_addr,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn remote_addr(&self) -> IpAddr {
        self.remote_addr
    }
}
