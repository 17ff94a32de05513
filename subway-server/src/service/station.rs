//! Station CRUD service.

use std::sync::Arc;

use crate::domain::{Station, StationId, StationName};
use crate::store::{StationStore, StoreError};

use super::ServiceError;

/// Owns station entities: creation, listing, deletion.
///
/// Stations have no update operation; a renamed station is a new
/// station in this model.
pub struct StationService<S> {
    store: Arc<S>,
}

impl<S: StationStore> StationService<S> {
    /// Create a new service on top of the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a station with a unique name.
    pub fn create(&self, name: &str) -> Result<Station, ServiceError> {
        let name = StationName::parse(name)?;
        let station = self
            .store
            .insert_station(name)
            .map_err(map_store_error)?;

        tracing::info!(id = station.id.0, name = %station.name, "created station");
        Ok(station)
    }

    /// All current stations, ordered by id.
    pub fn list(&self) -> Vec<Station> {
        self.store.stations()
    }

    /// Delete a station permanently.
    pub fn delete(&self, id: StationId) -> Result<(), ServiceError> {
        self.store.remove_station(id).map_err(map_store_error)
    }
}

fn map_store_error(err: StoreError) -> ServiceError {
    match err {
        StoreError::DuplicateName(name) => ServiceError::DuplicateName {
            resource: "station",
            name,
        },
        StoreError::RowNotFound(id) => ServiceError::NotFound {
            resource: "station",
            id,
        },
    }
}
