//! Common test utilities for integration tests.
//!
//! Everything runs against in-memory state; no external services needed.

pub mod fixtures;

use axum::Router;

use wordloop_backend::{router, AppState};
use wordloop_core::{Item, MemoryStore};

/// Test context owning a fully wired router.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Context over the default sample catalog.
    pub fn new() -> Self {
        Self::with_items(fixtures::sample_catalog())
    }

    /// Context over a caller-supplied catalog.
    pub fn with_items(items: Vec<Item>) -> Self {
        let state = AppState::new(MemoryStore::new(items));
        Self {
            app: router(state),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}
