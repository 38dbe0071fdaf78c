//! Business logic services

pub mod metadata;
pub mod scan;

use std::sync::Arc;

use crate::{config::AppConfig, error::AppResult, providers};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub scan: scan::ScanService,
    pub metadata: metadata::MetadataService,
}

impl Services {
    /// Create all services from the application configuration
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let providers = providers::from_config(&config.providers)?;

        Ok(Self::with_providers(config, providers))
    }

    /// Create services around an explicit provider list
    pub fn with_providers(
        config: &AppConfig,
        providers: Vec<Arc<dyn providers::MetadataProvider>>,
    ) -> Self {
        Self {
            scan: scan::ScanService::new(config.extractor),
            metadata: metadata::MetadataService::new(providers),
        }
    }
}
