//! JSON seed files for the in-memory stores.
//!
//! ```json
//! { "divisions": { "wu": { "accounts": [...], "transactions": [...] } } }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::in_memory::StoreData;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    divisions: HashMap<String, StoreData>,
}

impl SeedFile {
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let seed = Self::from_json(&raw)?;
        tracing::info!(path = %path.display(), divisions = seed.divisions.len(), "seed file loaded");
        Ok(seed)
    }

    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Remove and return the records of `division`; empty if the seed has none.
    pub fn take(&mut self, division: &str) -> StoreData {
        self.divisions.remove(division).unwrap_or_default()
    }
}
