//! Division-scoped record stores.
//!
//! Each division may keep accounts, traffic and ledger in different backing
//! stores, so the three concerns are separate traits. All of them are typed,
//! read-only views; writes happen in other systems.

pub mod in_memory;
pub mod seed;

use std::net::IpAddr;
use std::sync::Arc;

use dormnet_accounting::{CreditEntry, TrafficRecord, Transaction};
use dormnet_core::{AccountId, BackendResult};
use dormnet_members::{Account, Computer};

pub use in_memory::{InMemoryDivisionStore, StoreData};
pub use seed::{SeedError, SeedFile};

pub trait AccountStore: Send + Sync {
    fn account(&self, id: AccountId) -> BackendResult<Option<Account>>;
    fn account_by_login(&self, login: &str) -> BackendResult<Option<Account>>;
    fn computers_of(&self, owner: AccountId) -> BackendResult<Vec<Computer>>;
    fn computer_by_ip(&self, ip: IpAddr) -> BackendResult<Option<Computer>>;
    fn credit_entries(&self, account: AccountId) -> BackendResult<Vec<CreditEntry>>;
}

pub trait TrafficStore: Send + Sync {
    fn traffic_for_ip(&self, ip: IpAddr) -> BackendResult<Vec<TrafficRecord>>;
}

pub trait LedgerStore: Send + Sync {
    /// Transactions where `account` is the debit or the credit party.
    fn transactions_for(&self, account: AccountId) -> BackendResult<Vec<Transaction>>;
}

impl<S> AccountStore for Arc<S>
where
    S: AccountStore + ?Sized,
{
    fn account(&self, id: AccountId) -> BackendResult<Option<Account>> {
        (**self).account(id)
    }

    fn account_by_login(&self, login: &str) -> BackendResult<Option<Account>> {
        (**self).account_by_login(login)
    }

    fn computers_of(&self, owner: AccountId) -> BackendResult<Vec<Computer>> {
        (**self).computers_of(owner)
    }

    fn computer_by_ip(&self, ip: IpAddr) -> BackendResult<Option<Computer>> {
        (**self).computer_by_ip(ip)
    }

    fn credit_entries(&self, account: AccountId) -> BackendResult<Vec<CreditEntry>> {
        (**self).credit_entries(account)
    }
}

impl<S> TrafficStore for Arc<S>
where
    S: TrafficStore + ?Sized,
{
    fn traffic_for_ip(&self, ip: IpAddr) -> BackendResult<Vec<TrafficRecord>> {
        (**self).traffic_for_ip(ip)
    }
}

impl<S> LedgerStore for Arc<S>
where
    S: LedgerStore + ?Sized,
{
    fn transactions_for(&self, account: AccountId) -> BackendResult<Vec<Transaction>> {
        (**self).transactions_for(account)
    }
}
