//! Backend that answers every user query from a division's record stores.

use std::net::IpAddr;

use dormnet_accounting::{Amount, TrafficTotals, balance_for, latest_credit};
use dormnet_core::{AppConfig, BackendError, BackendResult, DomainError};
use dormnet_divisions::{AccountDetails, Capabilities, LedgerLine, User, UserBackend};
use dormnet_members::{Account, AddressBook};

use crate::store::{AccountStore, LedgerStore, TrafficStore};

#[derive(Debug)]
pub struct StoreBackend<S> {
    division: String,
    store: S,
    address_book: AddressBook,
}

impl<S> StoreBackend<S>
where
    S: AccountStore + TrafficStore + LedgerStore,
{
    pub fn new(division: impl Into<String>, store: S, address_book: AddressBook) -> Self {
        Self {
            division: division.into(),
            store,
            address_book,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn account_of(&self, user: &User) -> BackendResult<Account> {
        self.store.account(user.id)?.ok_or(BackendError::NotFound)
    }
}

fn to_user(account: Account) -> User {
    User {
        id: account.id,
        login: account.login,
    }
}

impl<S> UserBackend for StoreBackend<S>
where
    S: AccountStore + TrafficStore + LedgerStore + core::fmt::Debug,
{
    fn init_context(&self, config: &AppConfig) -> BackendResult<()> {
        tracing::info!(division = %self.division, debug = config.debug, "store-backed division ready");
        Ok(())
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            credit: true,
            traffic: true,
            finance: true,
            account_details: true,
        }
    }

    fn from_ip(&self, ip: IpAddr) -> BackendResult<Option<User>> {
        let Some(computer) = self.store.computer_by_ip(ip)? else {
            return Ok(None);
        };

        match self.store.account(computer.owner)? {
            Some(account) => Ok(Some(to_user(account))),
            None => Err(DomainError::invariant(format!(
                "computer {} ({ip}) references missing account {}",
                computer.mac, computer.owner
            ))
            .into()),
        }
    }

    fn from_login(&self, login: &str) -> BackendResult<Option<User>> {
        Ok(self.store.account_by_login(login)?.map(to_user))
    }

    /// Ledger balance of the user's account.
    fn current_credit(&self, user: &User) -> BackendResult<Amount> {
        let transactions = self.store.transactions_for(user.id)?;
        Ok(balance_for(&transactions, user.id)?)
    }

    fn account_details(&self, user: &User) -> BackendResult<Option<AccountDetails>> {
        let account = self.account_of(user)?;
        let computers = self.store.computers_of(account.id)?;

        let mut traffic = Vec::new();
        for computer in &computers {
            traffic.extend(self.store.traffic_for_ip(computer.ip)?);
        }

        let credit_entries = self.store.credit_entries(account.id)?;
        let credit = latest_credit(&credit_entries, account.id).map(|e| e.amount);

        let mut transactions = self.store.transactions_for(account.id)?;
        transactions.sort_by(|a, b| b.date().cmp(&a.date()));
        let lines = transactions
            .iter()
            .map(|t| -> Result<LedgerLine, DomainError> {
                Ok(LedgerLine {
                    date: t.date(),
                    description: t.description().unwrap_or_default().to_string(),
                    value: t.effective_value(account.id)?,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;
        let balance = balance_for(&transactions, account.id)?;

        Ok(Some(AccountDetails {
            address: account.address(&self.address_book),
            login: account.login,
            status: account.status.0,
            computers,
            credit,
            balance,
            transactions: lines,
            traffic: TrafficTotals::from_records(&traffic),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::NaiveDate;
    use dormnet_accounting::{CreditEntry, TrafficRecord, Transaction};
    use dormnet_core::{AccountId, DormitoryId, TransactionId};
    use dormnet_members::{AccountStatus, Computer};

    use crate::store::InMemoryDivisionStore;

    const IP: &str = "141.30.228.39";

    fn store() -> Arc<InMemoryDivisionStore> {
        let store = Arc::new(InMemoryDivisionStore::new());
        store.insert_account(Account {
            id: AccountId::new(1),
            dormitory_id: DormitoryId::new(2),
            floor: 4,
            room: "42".to_string(),
            login: "jdoe".to_string(),
            status: AccountStatus::ACTIVE,
        });
        store.insert_computer(Computer {
            owner: AccountId::new(1),
            mac: "00:de:ad:be:ef:00".to_string(),
            ip: IP.parse().unwrap(),
            hostname: "jdoe-pc".to_string(),
            alias: None,
        });
        store.insert_credit(CreditEntry {
            account_id: AccountId::new(1),
            amount: 1024,
            timetag: 2,
        });
        store.insert_credit(CreditEntry {
            account_id: AccountId::new(1),
            amount: 4096,
            timetag: 1,
        });
        store.insert_traffic(TrafficRecord {
            timetag: 2,
            ip: IP.parse().unwrap(),
            input: 300,
            output: 200,
        });
        store.insert_transaction(
            Transaction::new(
                TransactionId::new(1),
                NaiveDate::from_ymd_opt(2016, 1, 1).unwrap(),
                2000,
                Some("Einzahlung".to_string()),
                AccountId::new(1),
                AccountId::new(100),
            )
            .unwrap(),
        );
        store.insert_transaction(
            Transaction::new(
                TransactionId::new(2),
                NaiveDate::from_ymd_opt(2016, 2, 1).unwrap(),
                500,
                Some("Semesterbeitrag".to_string()),
                AccountId::new(100),
                AccountId::new(1),
            )
            .unwrap(),
        );
        store
    }

    fn backend(store: Arc<InMemoryDivisionStore>) -> StoreBackend<Arc<InMemoryDivisionStore>> {
        StoreBackend::new("wu", store, AddressBook::standard())
    }

    fn jdoe() -> User {
        User {
            id: AccountId::new(1),
            login: "jdoe".to_string(),
        }
    }

    #[test]
    fn resolves_users_by_device_address_and_login() {
        let backend = backend(store());
        assert_eq!(backend.from_ip(IP.parse().unwrap()).unwrap(), Some(jdoe()));
        assert_eq!(backend.from_ip("10.0.0.1".parse().unwrap()).unwrap(), None);
        assert_eq!(backend.from_login("jdoe").unwrap(), Some(jdoe()));
        assert_eq!(backend.from_login("nobody").unwrap(), None);
    }

    #[test]
    fn computer_without_owner_is_an_integrity_error() {
        let store = store();
        store.insert_computer(Computer {
            owner: AccountId::new(99),
            mac: "00:00:00:00:00:01".to_string(),
            ip: "141.30.228.40".parse().unwrap(),
            hostname: "orphan".to_string(),
            alias: None,
        });
        let err = backend(store).from_ip("141.30.228.40".parse().unwrap()).unwrap_err();
        assert!(matches!(err, BackendError::Domain(DomainError::InvariantViolation(_))));
    }

    #[test]
    fn current_credit_is_the_signed_ledger_balance() {
        assert_eq!(backend(store()).current_credit(&jdoe()).unwrap(), Amount::from_cents(1500));
    }

    #[test]
    fn outage_surfaces_as_transient() {
        let store = store();
        store.set_available(false);
        let err = backend(store).current_credit(&jdoe()).unwrap_err();
        assert!(err.is_transient());
    }

    #[test]
    fn account_details_render_every_section() {
        let details = backend(store()).account_details(&jdoe()).unwrap().unwrap();

        assert_eq!(details.address, "Wundstraße 7 / 4 42");
        assert_eq!(details.credit, Some(1024));
        assert_eq!(details.balance, Amount::from_cents(1500));
        assert_eq!(details.traffic.overall, 500);
        assert_eq!(details.computers.len(), 1);

        let values: Vec<i64> = details.transactions.iter().map(|l| l.value.cents()).collect();
        assert_eq!(values, vec![-500, 2000]);
    }

    #[test]
    fn details_for_a_vanished_account_are_not_found() {
        let user = User {
            id: AccountId::new(5),
            login: "ghost".to_string(),
        };
        let err = backend(store()).account_details(&user).unwrap_err();
        assert_eq!(err, BackendError::NotFound);
    }
}
