//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::CatalogClient;
use crate::config::ConsoleConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ConsoleConfig,
    catalog: CatalogClient,
}

impl AppState {
    /// Create a new application state with a client for the configured store.
    #[must_use]
    pub fn new(config: ConsoleConfig) -> Self {
        let catalog = CatalogClient::new(&config.api_url);
        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// Get a reference to the console configuration.
    #[must_use]
    pub fn config(&self) -> &ConsoleConfig {
        &self.inner.config
    }

    /// Get the store API client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }
}
