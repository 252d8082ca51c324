//! Application state for the compensation decision engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::PolicyLoader;
use crate::store::InMemoryEmployeeStore;

/// Shared application state.
///
/// Contains the loaded policy (read-only after construction, so it needs
/// no synchronization) and the employee store the API orchestrates
/// lookup-evaluate-persist against.
#[derive(Clone)]
pub struct AppState {
    /// The loaded compensation policy.
    policy: Arc<PolicyLoader>,
    /// The employee store backing the API.
    store: Arc<RwLock<InMemoryEmployeeStore>>,
}

impl AppState {
    /// Creates a new application state with the given policy loader and
    /// an empty employee store.
    pub fn new(policy: PolicyLoader) -> Self {
        Self::with_store(policy, InMemoryEmployeeStore::new())
    }

    /// Creates a new application state with a pre-seeded employee store.
    pub fn with_store(policy: PolicyLoader, store: InMemoryEmployeeStore) -> Self {
        Self {
            policy: Arc::new(policy),
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Returns a reference to the policy loader.
    pub fn policy(&self) -> &PolicyLoader {
        &self.policy
    }

    /// Returns the shared employee store.
    pub fn store(&self) -> &RwLock<InMemoryEmployeeStore> {
        &self.store
    }
}
