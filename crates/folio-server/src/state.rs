//! Shared application state.

use std::sync::Arc;

use folio_cache::FileStore;
use folio_core::{FolioConfig, Result};
use folio_runtime::PortfolioService;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: FolioConfig,
    pub service: PortfolioService,
}

impl AppState {
    pub fn new(config: FolioConfig, service: PortfolioService) -> Self {
        Self { config, service }
    }

    /// Service backed by the HTTP fetcher and a file cache under the data directory.
    pub fn from_config(config: FolioConfig) -> Result<Self> {
        let store = Arc::new(FileStore::open(&config.data_paths.cache)?);
        let service = PortfolioService::from_config(&config, store)?;
        Ok(Self::new(config, service))
    }
}
