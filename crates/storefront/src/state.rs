//! Application state shared across handlers.
//!
//! This is process-wide, read-only data. Per-visitor state (cart, sign-in,
//! open panels) lives in the session; see [`crate::middleware::Visitor`].

use std::sync::Arc;

use demo_store_core::Catalog;

use crate::config::StorefrontConfig;
use crate::middleware::VisitorLocks;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    visitor_locks: VisitorLocks,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                visitor_locks: VisitorLocks::new(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Per-session request locks.
    #[must_use]
    pub fn visitor_locks(&self) -> &VisitorLocks {
        &self.inner.visitor_locks
    }
}
