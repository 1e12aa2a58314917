//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::db::Store;
use crate::events::EventBus;
use crate::graphql::{CatalogSchema, build_schema};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and gives both front-ends the
/// same store and the GraphQL schema built over it.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    store: Store,
    schema: CatalogSchema,
}

impl AppState {
    /// Create application state over the seed catalog.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let store = Store::seeded(EventBus::new(config.event_capacity));
        Self::with_store(config, store)
    }

    /// Create application state over an existing store.
    #[must_use]
    pub fn with_store(config: ServerConfig, store: Store) -> Self {
        let schema = build_schema(store.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                schema,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the record store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    /// Get a reference to the GraphQL schema.
    #[must_use]
    pub fn schema(&self) -> &CatalogSchema {
        &self.inner.schema
    }
}
