//! Accounting module (double-entry ledger reads, traffic usage, credit snapshots).
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns. Records are
//! appended by other systems; everything here reads and derives.

pub mod credit;
pub mod ledger;
pub mod traffic;

pub use credit::{CreditEntry, latest_credit};
pub use ledger::{Amount, Transaction, balance_for, transactions_for};
pub use traffic::{TrafficRecord, TrafficTotals};
