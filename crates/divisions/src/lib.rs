//! `dormnet-divisions` — tenant (division) resolution and per-request user lookup.
//!
//! A [`DivisionRegistry`] is built once at startup and shared read-only. Every
//! request then resolves its division, its user, and finally the user's balance.

pub mod credit;
pub mod division;
pub mod registry;
pub mod session;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use credit::{CreditError, CreditReport, query_balance};
pub use division::{AccountDetails, Capabilities, Division, LedgerLine, User, UserBackend};
pub use registry::DivisionRegistry;
pub use session::{Locale, RequestContext, SessionContext};
pub use user::{ResolvedUser, current_capabilities, current_user, user_from_ip, user_from_session};
