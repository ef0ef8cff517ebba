//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::db::FeedbackStore;

/// Application state shared across all handlers.
///
/// Generic over the store implementation so tests can run the real router
/// against an in-memory store. Cheaply cloneable via `Arc`.
pub struct AppState<S> {
    inner: Arc<AppStateInner<S>>,
}

struct AppStateInner<S> {
    config: ServerConfig,
    store: S,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: FeedbackStore> AppState<S> {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ServerConfig, store: S) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the feedback store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.inner.store
    }
}
