//! Infrastructure layer: record stores, seed loading, concrete division backends.

pub mod backends;
pub mod store;

use std::sync::Arc;

use dormnet_core::DomainResult;
use dormnet_divisions::Division;
use dormnet_members::AddressBook;

use crate::backends::{StoreBackend, sample_backend};
use crate::store::{InMemoryDivisionStore, SeedFile};

/// Divisions this deployment knows about, before environment filtering.
///
/// Store-backed divisions are filled from `seed`; divisions it does not
/// mention start empty. Fails only if the built-in sample records are invalid.
pub fn standard_divisions(seed: &mut SeedFile) -> DomainResult<Vec<Division>> {
    let store_division = |name: &str, display: &str, seed: &mut SeedFile| {
        let store = Arc::new(InMemoryDivisionStore::from_data(seed.take(name)));
        Division::new(
            name,
            display,
            Arc::new(StoreBackend::new(name, store, AddressBook::standard())),
        )
    };

    Ok(vec![
        Division::new("sample", "Sample division", Arc::new(sample_backend()?)).debug_only(),
        store_division("wu", "Wundtstraße & Zellescher Weg", seed),
        store_division("hss", "Hochschulstraße", seed),
    ])
}
