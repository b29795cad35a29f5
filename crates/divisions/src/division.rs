//! Division (tenant) model and the backend interface each tenant implements.

use std::net::IpAddr;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use dormnet_accounting::{Amount, TrafficTotals};
use dormnet_core::{AccountId, AppConfig, BackendResult};
use dormnet_members::Computer;

/// Handle of a user inside one division's backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct User {
    pub id: AccountId,
    pub login: String,
}

/// Which account features a division's backend can answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub credit: bool,
    pub traffic: bool,
    pub finance: bool,
    pub account_details: bool,
}

/// One ledger transaction as seen from the account owner's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerLine {
    pub date: NaiveDate,
    pub description: String,
    pub value: Amount,
}

/// Everything shown on an account's overview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountDetails {
    pub login: String,
    pub status: i32,
    pub address: String,
    pub computers: Vec<Computer>,
    /// Latest traffic credit snapshot, if the backend has one.
    pub credit: Option<i64>,
    pub balance: Amount,
    pub transactions: Vec<LedgerLine>,
    pub traffic: TrafficTotals,
}

/// Per-division account backend.
///
/// Every method is a synchronous read; implementations decide how they reach
/// their store and map outages to [`dormnet_core::BackendError::Unavailable`].
pub trait UserBackend: Send + Sync + core::fmt::Debug {
    /// Called once per process, before requests are served.
    fn init_context(&self, _config: &AppConfig) -> BackendResult<()> {
        Ok(())
    }

    fn capabilities(&self) -> Capabilities;

    /// User owning the device at `ip`, if any.
    fn from_ip(&self, ip: IpAddr) -> BackendResult<Option<User>>;

    fn from_login(&self, login: &str) -> BackendResult<Option<User>>;

    fn current_credit(&self, user: &User) -> BackendResult<Amount>;

    fn account_details(&self, _user: &User) -> BackendResult<Option<AccountDetails>> {
        Ok(None)
    }
}

/// A tenant: name, environment flag and its backend.
#[derive(Debug, Clone)]
pub struct Division {
    name: String,
    display_name: String,
    debug_only: bool,
    backend: Arc<dyn UserBackend>,
}

impl Division {
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        backend: Arc<dyn UserBackend>,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            debug_only: false,
            backend,
        }
    }

    /// Mark the division as available in debug mode only.
    pub fn debug_only(mut self) -> Self {
        self.debug_only = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn is_debug_only(&self) -> bool {
        self.debug_only
    }

    pub fn backend(&self) -> &dyn UserBackend {
        self.backend.as_ref()
    }
}

impl PartialEq for Division {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Division {}
