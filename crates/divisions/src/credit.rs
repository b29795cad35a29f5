//! Balance query for display.

use serde::Serialize;
use thiserror::Error;

use dormnet_accounting::Amount;
use dormnet_core::BackendError;

use crate::registry::DivisionRegistry;
use crate::session::{Locale, RequestContext};
use crate::user::current_user;

/// Why a balance could not be shown.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CreditError {
    #[error("address not recognized as belonging to the network")]
    NotRecognized,

    #[error("failed to query data")]
    QueryFailed,
}

impl CreditError {
    pub fn message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (CreditError::NotRecognized, Locale::En) => {
                "This address is not recognized as belonging to our network"
            }
            (CreditError::NotRecognized, Locale::De) => "Diese IP gehört nicht zu unserem Netzwerk",
            (CreditError::QueryFailed, Locale::En) => "Failed to query data",
            (CreditError::QueryFailed, Locale::De) => "Fehler bei der Abfrage der Daten",
        }
    }
}

impl From<BackendError> for CreditError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::NotFound => CreditError::NotRecognized,
            BackendError::Unavailable(reason) => {
                tracing::warn!(%reason, "account backend unavailable");
                CreditError::QueryFailed
            }
            BackendError::Domain(e) => {
                tracing::error!(error = %e, "account backend returned inconsistent data");
                CreditError::QueryFailed
            }
        }
    }
}

/// Result shown to the client: `{"data": 12.5}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditReport {
    Data(Amount),
    Error(String),
}

/// Balance of the request's user.
///
/// Never fails: every lookup or backend failure becomes a localized
/// [`CreditReport::Error`].
pub fn query_balance(registry: &DivisionRegistry, ctx: &RequestContext) -> CreditReport {
    match lookup_credit(registry, ctx) {
        Ok(amount) => CreditReport::Data(amount),
        Err(e) => CreditReport::Error(e.message(ctx.session().locale()).to_string()),
    }
}

fn lookup_credit(registry: &DivisionRegistry, ctx: &RequestContext) -> Result<Amount, CreditError> {
    let user = current_user(registry, ctx)?.ok_or(CreditError::NotRecognized)?;
    Ok(user.current_credit()?)
}
