//! Application state for the web layer.

use std::sync::Arc;

use crate::service::{LineService, StationService};
use crate::store::MemoryStore;

/// Shared application state.
///
/// Contains the services needed to handle requests. Both services
/// share one store, owned here and handed to each at construction
/// rather than reached through a global.
#[derive(Clone)]
pub struct AppState {
    /// Station CRUD service
    pub stations: Arc<StationService<MemoryStore>>,

    /// Line CRUD service
    pub lines: Arc<LineService<MemoryStore>>,
}

impl AppState {
    /// Create a new app state around a store.
    pub fn new(store: MemoryStore) -> Self {
        let store = Arc::new(store);
        Self {
            stations: Arc::new(StationService::new(store.clone())),
            lines: Arc::new(LineService::new(store)),
        }
    }
}
