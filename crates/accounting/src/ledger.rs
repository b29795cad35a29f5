use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

use dormnet_core::{AccountId, DomainError, DomainResult, Entity, TransactionId, ValueObject};

/// Signed amount in minor currency units (cents).
///
/// Serializes as major units (`500` cents → `5.0`), which is what clients display.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Value in major units (`cents / 100`).
    pub fn as_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    pub fn checked_neg(self) -> Option<Amount> {
        self.0.checked_neg().map(Amount)
    }
}

impl ValueObject for Amount {}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_major())
    }
}

/// Wire shape of a stored transaction, validated into [`Transaction`].
#[derive(Debug, Clone, Deserialize)]
struct TransactionRecord {
    id: TransactionId,
    date: NaiveDate,
    amount: i64,
    #[serde(default)]
    description: Option<String>,
    debit_account: AccountId,
    credit_account: AccountId,
}

/// Double-entry ledger transaction (immutable once recorded).
///
/// # Invariants
/// - `debit_account != credit_account`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TransactionRecord")]
pub struct Transaction {
    id: TransactionId,
    date: NaiveDate,
    /// Amount in cents, as booked from the debit side.
    amount: i64,
    description: Option<String>,
    debit_account: AccountId,
    credit_account: AccountId,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        date: NaiveDate,
        amount: i64,
        description: Option<String>,
        debit_account: AccountId,
        credit_account: AccountId,
    ) -> DomainResult<Self> {
        if debit_account == credit_account {
            return Err(DomainError::invariant(format!(
                "transaction {id}: debit and credit account are both {debit_account}"
            )));
        }

        Ok(Self {
            id,
            date,
            amount,
            description,
            debit_account,
            credit_account,
        })
    }

    pub fn id_typed(&self) -> TransactionId {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Amount {
        Amount::from_cents(self.amount)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn debit_account(&self) -> AccountId {
        self.debit_account
    }

    pub fn credit_account(&self) -> AccountId {
        self.credit_account
    }

    /// Whether `account` is the debit or the credit party.
    pub fn involves(&self, account: AccountId) -> bool {
        self.debit_account == account || self.credit_account == account
    }

    /// Value as seen from `viewpoint`: positive on the debit side, negative on
    /// the credit side.
    ///
    /// The debit side is checked first and only matches when the credit side
    /// does not, so a record with both sides equal never yields a positive value.
    /// A viewpoint matching neither side is an invariant violation.
    pub fn effective_value(&self, viewpoint: AccountId) -> DomainResult<Amount> {
        let amount = self.amount();

        if self.debit_account == viewpoint && self.credit_account != viewpoint {
            Ok(amount)
        } else if self.credit_account == viewpoint {
            amount.checked_neg().ok_or_else(|| {
                DomainError::invariant(format!("transaction {}: amount out of range", self.id))
            })
        } else {
            Err(DomainError::invariant(format!(
                "viewpoint account {viewpoint} is neither debit ({}) nor credit ({}) of transaction {}",
                self.debit_account, self.credit_account, self.id
            )))
        }
    }
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = DomainError;

    fn try_from(r: TransactionRecord) -> Result<Self, Self::Error> {
        Transaction::new(
            r.id,
            r.date,
            r.amount,
            r.description,
            r.debit_account,
            r.credit_account,
        )
    }
}

impl Entity for Transaction {
    type Id = TransactionId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl core::fmt::Display for Transaction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "<Transaction {}€ debit: {} → credit: {} '{}'>",
            self.amount(),
            self.debit_account,
            self.credit_account,
            self.description().unwrap_or_default(),
        )
    }
}

/// Transactions in which `account` is either party.
pub fn transactions_for<'a, I>(transactions: I, account: AccountId) -> impl Iterator<Item = &'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions.into_iter().filter(move |t| t.involves(account))
}

/// Balance of `account`: the sum of the effective values of every transaction
/// involving it. Unrelated transactions are skipped.
pub fn balance_for<'a, I>(transactions: I, account: AccountId) -> DomainResult<Amount>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut total = Amount::ZERO;
    for t in transactions_for(transactions, account) {
        let value = t.effective_value(account)?;
        total = total
            .checked_add(value)
            .ok_or_else(|| DomainError::invariant(format!("balance of account {account} overflows")))?;
    }
    Ok(total)
}
