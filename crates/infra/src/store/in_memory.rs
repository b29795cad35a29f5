use std::net::IpAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Deserialize;

use dormnet_accounting::{CreditEntry, TrafficRecord, Transaction};
use dormnet_core::{AccountId, BackendError, BackendResult};
use dormnet_members::{Account, Computer};

use super::{AccountStore, LedgerStore, TrafficStore};

/// Raw record sets of one division, as loaded from a seed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreData {
    pub accounts: Vec<Account>,
    pub computers: Vec<Computer>,
    pub credit: Vec<CreditEntry>,
    pub traffic: Vec<TrafficRecord>,
    pub transactions: Vec<Transaction>,
}

/// In-memory division store for tests/dev.
///
/// Can be switched unavailable to simulate an outage of the backing database.
#[derive(Debug)]
pub struct InMemoryDivisionStore {
    inner: RwLock<StoreData>,
    available: AtomicBool,
}

impl InMemoryDivisionStore {
    pub fn new() -> Self {
        Self::from_data(StoreData::default())
    }

    pub fn from_data(data: StoreData) -> Self {
        Self {
            inner: RwLock::new(data),
            available: AtomicBool::new(true),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn insert_account(&self, account: Account) {
        let mut data = self.write();
        data.accounts.retain(|a| a.id != account.id);
        data.accounts.push(account);
    }

    pub fn insert_computer(&self, computer: Computer) {
        let mut data = self.write();
        data.computers.push(computer);
    }

    pub fn insert_credit(&self, entry: CreditEntry) {
        let mut data = self.write();
        data.credit.push(entry);
    }

    pub fn insert_traffic(&self, record: TrafficRecord) {
        let mut data = self.write();
        data.traffic.push(record);
    }

    pub fn insert_transaction(&self, transaction: Transaction) {
        let mut data = self.write();
        data.transactions.push(transaction);
    }

    /// Writes recover a poisoned lock; reads still report it as unavailable.
    fn write(&self) -> RwLockWriteGuard<'_, StoreData> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self) -> BackendResult<RwLockReadGuard<'_, StoreData>> {
        if !self.available.load(Ordering::SeqCst) {
            return Err(BackendError::unavailable("in-memory store switched off"));
        }
        self.inner
            .read()
            .map_err(|_| BackendError::unavailable("in-memory store lock poisoned"))
    }
}

impl Default for InMemoryDivisionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore for InMemoryDivisionStore {
    fn account(&self, id: AccountId) -> BackendResult<Option<Account>> {
        let data = self.read()?;
        Ok(data.accounts.iter().find(|a| a.id == id).cloned())
    }

    fn account_by_login(&self, login: &str) -> BackendResult<Option<Account>> {
        let data = self.read()?;
        Ok(data.accounts.iter().find(|a| a.login == login).cloned())
    }

    fn computers_of(&self, owner: AccountId) -> BackendResult<Vec<Computer>> {
        let data = self.read()?;
        Ok(data
            .computers
            .iter()
            .filter(|c| c.belongs_to(owner))
            .cloned()
            .collect())
    }

    fn computer_by_ip(&self, ip: IpAddr) -> BackendResult<Option<Computer>> {
        let data = self.read()?;
        Ok(data.computers.iter().find(|c| c.ip == ip).cloned())
    }

    fn credit_entries(&self, account: AccountId) -> BackendResult<Vec<CreditEntry>> {
        let data = self.read()?;
        Ok(data
            .credit
            .iter()
            .filter(|e| e.account_id == account)
            .cloned()
            .collect())
    }
}

impl TrafficStore for InMemoryDivisionStore {
    fn traffic_for_ip(&self, ip: IpAddr) -> BackendResult<Vec<TrafficRecord>> {
        let data = self.read()?;
        Ok(data.traffic.iter().filter(|r| r.ip == ip).cloned().collect())
    }
}

impl LedgerStore for InMemoryDivisionStore {
    fn transactions_for(&self, account: AccountId) -> BackendResult<Vec<Transaction>> {
        let data = self.read()?;
        Ok(dormnet_accounting::transactions_for(&data.transactions, account)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dormnet_core::{DormitoryId, TransactionId};
    use dormnet_members::AccountStatus;

    fn account(id: u32, login: &str) -> Account {
        Account {
            id: AccountId::new(id),
            dormitory_id: DormitoryId::new(1),
            floor: 1,
            room: "11".to_string(),
            login: login.to_string(),
            status: AccountStatus::ACTIVE,
        }
    }

    fn tx(id: u64, debit: u32, credit: u32) -> Transaction {
        Transaction::new(
            TransactionId::new(id),
            NaiveDate::from_ymd_opt(2016, 4, 1).unwrap(),
            100,
            None,
            AccountId::new(debit),
            AccountId::new(credit),
        )
        .unwrap()
    }

    #[test]
    fn account_lookups_by_id_and_login() {
        let store = InMemoryDivisionStore::new();
        store.insert_account(account(1, "jdoe"));
        store.insert_account(account(2, "erika"));

        assert_eq!(store.account(AccountId::new(2)).unwrap().unwrap().login, "erika");
        assert_eq!(store.account_by_login("jdoe").unwrap().unwrap().id, AccountId::new(1));
        assert!(store.account(AccountId::new(3)).unwrap().is_none());
    }

    #[test]
    fn reinserting_an_account_replaces_it() {
        let store = InMemoryDivisionStore::new();
        store.insert_account(account(1, "old"));
        store.insert_account(account(1, "new"));
        assert!(store.account_by_login("old").unwrap().is_none());
        assert!(store.account_by_login("new").unwrap().is_some());
    }

    #[test]
    fn ledger_query_returns_both_sides() {
        let store = InMemoryDivisionStore::new();
        store.insert_transaction(tx(1, 1, 2));
        store.insert_transaction(tx(2, 3, 1));
        store.insert_transaction(tx(3, 3, 4));

        let ids: Vec<u64> = store
            .transactions_for(AccountId::new(1))
            .unwrap()
            .iter()
            .map(|t| t.id_typed().get())
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn inserts_survive_a_poisoned_lock() {
        let store = std::sync::Arc::new(InMemoryDivisionStore::new());
        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("writer died while holding the lock");
        })
        .join();
        assert!(store.inner.is_poisoned());

        store.insert_account(account(1, "jdoe"));

        let err = store.account(AccountId::new(1)).unwrap_err();
        assert!(err.is_transient());
        let data = store.inner.read().unwrap_or_else(PoisonError::into_inner);
        assert_eq!(data.accounts.len(), 1);
    }

    #[test]
    fn switched_off_store_reports_unavailable() {
        let store = InMemoryDivisionStore::new();
        store.insert_account(account(1, "jdoe"));
        store.set_available(false);

        let err = store.account(AccountId::new(1)).unwrap_err();
        assert!(err.is_transient());
        assert!(store.transactions_for(AccountId::new(1)).is_err());

        store.set_available(true);
        assert!(store.account(AccountId::new(1)).unwrap().is_some());
    }
}
