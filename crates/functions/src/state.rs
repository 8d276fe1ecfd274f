//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::FunctionsConfig;
use crate::db::ServiceRepository;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; nothing in it is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: FunctionsConfig,
    services: Box<dyn ServiceRepository>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Functions configuration
    /// * `services` - Store backing `get-active-services` and readiness checks
    pub fn new(config: FunctionsConfig, services: impl ServiceRepository + 'static) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                services: Box::new(services),
            }),
        }
    }

    /// Get a reference to the functions configuration.
    #[must_use]
    pub fn config(&self) -> &FunctionsConfig {
        &self.inner.config
    }

    /// Get a reference to the service repository.
    #[must_use]
    pub fn services(&self) -> &dyn ServiceRepository {
        self.inner.services.as_ref()
    }
}
