//! Application state for the vehicle registry API

use std::sync::Arc;

use vreg_core::VehicleStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// The vehicle collection, shared by every request
    store: Arc<VehicleStore>,
}

impl AppState {
    /// Create a new AppState with an empty store
    pub fn new() -> Self {
        Self::with_store(Arc::new(VehicleStore::new()))
    }

    /// Create a new AppState around an existing store
    pub fn with_store(store: Arc<VehicleStore>) -> Self {
        Self { store }
    }

    /// Get the vehicle store
    pub fn store(&self) -> &VehicleStore {
        &self.store
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
