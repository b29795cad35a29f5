//! Concrete per-division user backends.

pub mod sample;
pub mod store_backed;

pub use sample::{sample_backend, sample_data};
pub use store_backed::StoreBackend;
