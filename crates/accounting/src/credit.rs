use serde::{Deserialize, Serialize};

use dormnet_core::AccountId;

/// Append-only credit snapshot. `(account_id, timetag)` is the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditEntry {
    pub account_id: AccountId,
    pub amount: i64,
    pub timetag: i64,
}

/// Most recent snapshot for `account`, if any.
pub fn latest_credit<'a, I>(entries: I, account: AccountId) -> Option<&'a CreditEntry>
where
    I: IntoIterator<Item = &'a CreditEntry>,
{
    entries
        .into_iter()
        .filter(|e| e.account_id == account)
        .max_by_key(|e| e.timetag)
}
