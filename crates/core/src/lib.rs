//! `dormnet-core` — foundation building blocks shared by every dormnet crate.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns),
//! plus the process configuration record handed to divisions at startup.

pub mod config;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use config::{AppConfig, ConfigError, LogFormat};
pub use entity::Entity;
pub use error::{BackendError, BackendResult, DomainError, DomainResult};
pub use id::{AccountId, DormitoryId, TransactionId};
pub use value_object::ValueObject;
