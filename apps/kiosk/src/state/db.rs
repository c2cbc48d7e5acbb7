//! # Store State
//!
//! Wraps the prism-store handle for command access.
//!
//! ## Thread Safety
//! `Store` holds an internal connection pool and is cheaply cloneable, so no
//! additional locking is needed here.

use prism_store::Store;

/// Shared store state.
#[derive(Debug, Clone)]
pub struct DbState {
    store: Store,
}

impl DbState {
    /// Wraps an initialized store.
    pub fn new(store: Store) -> Self {
        DbState { store }
    }

    /// Returns the underlying store handle.
    pub fn inner(&self) -> &Store {
        &self.store
    }
}
