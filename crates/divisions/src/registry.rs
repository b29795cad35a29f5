//! Process-wide division table and division resolution.

use std::net::IpAddr;

use dormnet_core::{AppConfig, BackendResult};

use crate::division::Division;
use crate::session::SessionContext;

/// Immutable table of the divisions served by this process.
///
/// Built once at startup (debug-only divisions are dropped unless `debug_mode`)
/// and then shared behind an `Arc`. There is no interior mutability, so
/// concurrent readers need no locking.
#[derive(Debug, Clone)]
pub struct DivisionRegistry {
    divisions: Vec<Division>,
    fallback: Option<String>,
    debug_mode: bool,
}

impl DivisionRegistry {
    pub fn build<I>(candidates: I, debug_mode: bool) -> Self
    where
        I: IntoIterator<Item = Division>,
    {
        let divisions: Vec<Division> = candidates
            .into_iter()
            .filter(|d| debug_mode || !d.is_debug_only())
            .collect();

        tracing::info!(
            debug_mode,
            divisions = ?divisions.iter().map(Division::name).collect::<Vec<_>>(),
            "division registry built"
        );

        Self {
            divisions,
            fallback: None,
            debug_mode,
        }
    }

    /// Designate the division that address-based lookups resolve to.
    pub fn with_fallback(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if self.by_name(&name).is_none() {
            tracing::warn!(division = %name, "fallback division is not registered; address lookups will find no division");
        }
        self.fallback = Some(name);
        self
    }

    /// Run every division's one-time initialization hook.
    pub fn init_context(&self, config: &AppConfig) -> BackendResult<()> {
        for division in &self.divisions {
            division.backend().init_context(config)?;
            tracing::debug!(division = division.name(), "division initialized");
        }
        Ok(())
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    pub fn len(&self) -> usize {
        self.divisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.divisions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Division> {
        self.divisions.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.divisions.iter().map(Division::name).collect()
    }

    pub fn by_name(&self, name: &str) -> Option<&Division> {
        self.divisions.iter().find(|d| d.name() == name)
    }

    /// Division selected by the session, if it names a registered one.
    pub fn current_division(&self, session: &SessionContext) -> Option<&Division> {
        self.by_name(session.division_name()?)
    }

    /// Division responsible for `ip`.
    ///
    /// There is no address routing table: every address maps to the fallback
    /// division.
    pub fn division_from_ip(&self, ip: IpAddr) -> Option<&Division> {
        let division = self.by_name(self.fallback.as_deref()?);
        tracing::trace!(%ip, division = ?division.map(Division::name), "division from address");
        division
    }
}
