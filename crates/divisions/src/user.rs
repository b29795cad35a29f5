//! Per-request user resolution.
//!
//! Results are plain values computed once per call; nothing is cached between
//! calls, so a changed session division is picked up immediately.

use std::net::IpAddr;

use dormnet_accounting::Amount;
use dormnet_core::BackendResult;

use crate::division::{AccountDetails, Capabilities, Division, User};
use crate::registry::DivisionRegistry;
use crate::session::{RequestContext, SessionContext};

/// A user together with the division whose backend knows them.
#[derive(Debug, Clone)]
pub struct ResolvedUser<'r> {
    division: &'r Division,
    user: User,
}

impl<'r> ResolvedUser<'r> {
    pub fn new(division: &'r Division, user: User) -> Self {
        Self { division, user }
    }

    pub fn division(&self) -> &'r Division {
        self.division
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn current_credit(&self) -> BackendResult<Amount> {
        self.division.backend().current_credit(&self.user)
    }

    pub fn account_details(&self) -> BackendResult<Option<AccountDetails>> {
        self.division.backend().account_details(&self.user)
    }
}

/// User owning `ip` in the division responsible for that address.
///
/// No responsible division is an absence, not an error.
pub fn user_from_ip(registry: &DivisionRegistry, ip: IpAddr) -> BackendResult<Option<ResolvedUser<'_>>> {
    let Some(division) = registry.division_from_ip(ip) else {
        tracing::debug!(%ip, "no division for address");
        return Ok(None);
    };

    let user = division.backend().from_ip(ip)?;
    Ok(user.map(|u| ResolvedUser::new(division, u)))
}

/// Authenticated user of the session, looked up in the session's division.
pub fn user_from_session<'r>(
    registry: &'r DivisionRegistry,
    session: &SessionContext,
) -> BackendResult<Option<ResolvedUser<'r>>> {
    let Some(login) = session.identity() else {
        return Ok(None);
    };
    let Some(division) = registry.current_division(session) else {
        tracing::debug!(
            division = ?session.division_name(),
            "authenticated session names no registered division"
        );
        return Ok(None);
    };

    let user = division.backend().from_login(login)?;
    Ok(user.map(|u| ResolvedUser::new(division, u)))
}

/// The session's user when authenticated, otherwise the owner of the caller's address.
pub fn current_user<'r>(
    registry: &'r DivisionRegistry,
    ctx: &RequestContext,
) -> BackendResult<Option<ResolvedUser<'r>>> {
    if ctx.session().is_authenticated() {
        user_from_session(registry, ctx.session())
    } else {
        user_from_ip(registry, ctx.remote_addr())
    }
}

/// Feature set of the division active for `session`.
pub fn current_capabilities(registry: &DivisionRegistry, session: &SessionContext) -> Option<Capabilities> {
    registry
        .current_division(session)
        .map(|d| d.backend().capabilities())
}
