//! Application state shared across all handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::menu::MenuService;
use crate::metrics::Metrics;
use crate::store::MenuStore;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Menu lookups and formatting.
    menus: MenuService,

    /// Prometheus metrics.
    metrics: Metrics,

    /// Route namespace (e.g., "wp-rest-menu/v1").
    namespace: String,

    /// Full path prefix the API is mounted under.
    api_prefix: String,
}

impl AppState {
    /// Create application state over a menu store.
    pub fn new(config: &Config, store: Arc<dyn MenuStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                menus: MenuService::new(store, config.max_menu_depth),
                metrics: Metrics::new(),
                namespace: config.namespace(),
                api_prefix: config.api_prefix(),
            }),
        }
    }

    /// Menu service.
    pub fn menus(&self) -> &MenuService {
        &self.inner.menus
    }

    /// Prometheus metrics.
    pub fn metrics(&self) -> &Metrics {
        &self.inner.metrics
    }

    /// Route namespace.
    pub fn namespace(&self) -> &str {
        &self.inner.namespace
    }

    /// Full API path prefix.
    pub fn api_prefix(&self) -> &str {
        &self.inner.api_prefix
    }
}
