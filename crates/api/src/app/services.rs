use std::sync::Arc;

use thiserror::Error;

use dormnet_core::{AppConfig, BackendError, DomainError};
use dormnet_divisions::DivisionRegistry;
use dormnet_infra::standard_divisions;
use dormnet_infra::store::{SeedError, SeedFile};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error("division initialization failed: {0}")]
    Init(#[from] BackendError),

    #[error("built-in division data is invalid: {0}")]
    Fixture(#[from] DomainError),

    #[error("fallback division `{0}` is not registered")]
    UnknownFallback(String),
}

/// Shared, read-only state of the running service.
#[derive(Debug, Clone)]
pub struct AppServices {
    registry: Arc<DivisionRegistry>,
}

impl AppServices {
    pub fn new(registry: DivisionRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &DivisionRegistry {
        &self.registry
    }
}

/// Build the registry for `config` and run every division's init hook.
///
/// This is the single point where the registry is created; afterwards it is
/// only read.
pub fn build_services(config: &AppConfig) -> Result<AppServices, ServiceError> {
    let mut seed = match &config.seed_path {
        Some(path) => SeedFile::load(path)?,
        None => SeedFile::default(),
    };

    let registry = DivisionRegistry::build(standard_divisions(&mut seed)?, config.debug);
    if registry.by_name(&config.fallback_division).is_none() {
        return Err(ServiceError::UnknownFallback(config.fallback_division.clone()));
    }
    let registry = registry.with_fallback(config.fallback_division.clone());
    registry.init_context(config)?;

    Ok(AppServices::new(registry))
}
