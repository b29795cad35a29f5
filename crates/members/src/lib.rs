//! Members domain module (accounts, their computers, postal addresses).
//!
//! Records here are read-only views of what the account backend stores; this
//! crate never writes them.

pub mod account;
pub mod address;

pub use account::{Account, AccountStatus, Computer};
pub use address::AddressBook;
