use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use dormnet_core::{AccountId, DormitoryId, Entity};

use crate::address::AddressBook;

/// Backend status code of an account. `1` is a regular active member.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountStatus(pub i32);

impl AccountStatus {
    pub const ACTIVE: AccountStatus = AccountStatus(1);

    pub fn is_active(&self) -> bool {
        *self == Self::ACTIVE
    }
}

impl Default for AccountStatus {
    fn default() -> Self {
        Self::ACTIVE
    }
}

/// Member account as stored by a division's account backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub dormitory_id: DormitoryId,
    pub floor: i32,
    pub room: String,
    /// Unique login name.
    pub login: String,
    #[serde(default)]
    pub status: AccountStatus,
}

impl Account {
    /// Postal address, or `""` when the dormitory id is unknown to `book`.
    pub fn address(&self, book: &AddressBook) -> String {
        book.resolve(self.dormitory_id, self.floor, &self.room)
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// A registered device. `(mac, ip)` identifies it; exactly one account owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Computer {
    pub owner: AccountId,
    pub mac: String,
    pub ip: IpAddr,
    pub hostname: String,
    #[serde(default)]
    pub alias: Option<String>,
}

impl Computer {
    pub fn belongs_to(&self, account: AccountId) -> bool {
        self.owner == account
    }
}

impl Entity for Computer {
    type Id = (String, IpAddr);

    fn id(&self) -> Self::Id {
        (self.mac.to_lowercase(), self.ip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(dormitory: u32) -> Account {
        Account {
            id: AccountId::new(7),
            dormitory_id: DormitoryId::new(dormitory),
            floor: 2,
            room: "21".to_string(),
            login: "jdoe".to_string(),
            status: AccountStatus::ACTIVE,
        }
    }

    #[test]
    fn address_is_rendered_from_the_book() {
        let book = AddressBook::standard();
        assert_eq!(account(7).address(&book), "Zellescher Weg 41 / 2 21");
        assert_eq!(account(0).address(&book), "");
    }

    #[test]
    fn computer_identity_ignores_mac_case() {
        let a = Computer {
            owner: AccountId::new(7),
            mac: "AA:BB:CC:00:11:22".to_string(),
            ip: "141.30.1.2".parse().unwrap(),
            hostname: "desk".to_string(),
            alias: None,
        };
        let b = Computer {
            mac: "aa:bb:cc:00:11:22".to_string(),
            hostname: "renamed".to_string(),
            ..a.clone()
        };
        assert_eq!(a.id(), b.id());
        assert!(a.belongs_to(AccountId::new(7)));
    }

    #[test]
    fn status_defaults_to_active_when_missing() {
        let json = r#"{"id":1,"dormitory_id":1,"floor":0,"room":"1","login":"x"}"#;
        let parsed: Account = serde_json::from_str(json).unwrap();
        assert!(parsed.status.is_active());
    }
}
