//! Scriptable in-process backend for unit tests.

use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use dormnet_accounting::Amount;
use dormnet_core::{AccountId, AppConfig, BackendError, BackendResult};

use crate::division::{Capabilities, Division, User, UserBackend};

#[derive(Debug, Default)]
struct State {
    users: Mutex<Vec<(IpAddr, User)>>,
    credit: Mutex<Option<BackendResult<Amount>>>,
    lookup_failure: Mutex<Option<BackendError>>,
    init_calls: AtomicUsize,
}

/// Clones share state, so a test can keep a handle after moving one into a division.
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    state: Arc<State>,
}

impl FakeBackend {
    pub fn with_user(self, ip: &str, id: u32, login: &str) -> Self {
        let user = User {
            id: AccountId::new(id),
            login: login.to_string(),
        };
        self.state
            .users
            .lock()
            .unwrap()
            .push((ip.parse().unwrap(), user));
        self
    }

    pub fn with_credit(self, credit: BackendResult<Amount>) -> Self {
        *self.state.credit.lock().unwrap() = Some(credit);
        self
    }

    pub fn failing_lookups(self, err: BackendError) -> Self {
        *self.state.lookup_failure.lock().unwrap() = Some(err);
        self
    }

    pub fn init_calls(&self) -> usize {
        self.state.init_calls.load(Ordering::SeqCst)
    }

    fn check_lookup(&self) -> BackendResult<()> {
        match self.state.lookup_failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl UserBackend for FakeBackend {
    fn init_context(&self, _config: &AppConfig) -> BackendResult<()> {
        self.state.init_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            credit: true,
            ..Capabilities::default()
        }
    }

    fn from_ip(&self, ip: IpAddr) -> BackendResult<Option<User>> {
        self.check_lookup()?;
        let users = self.state.users.lock().unwrap();
        Ok(users.iter().find(|(a, _)| *a == ip).map(|(_, u)| u.clone()))
    }

    fn from_login(&self, login: &str) -> BackendResult<Option<User>> {
        self.check_lookup()?;
        let users = self.state.users.lock().unwrap();
        Ok(users.iter().find(|(_, u)| u.login == login).map(|(_, u)| u.clone()))
    }

    fn current_credit(&self, _user: &User) -> BackendResult<Amount> {
        self.state
            .credit
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(Ok(Amount::ZERO))
    }
}

pub fn division(name: &str, backend: FakeBackend) -> Division {
    Division::new(name, name.to_uppercase(), Arc::new(backend))
}
