//! Line CRUD service.

use std::sync::Arc;

use crate::domain::{Line, LineColor, LineId, LineName};
use crate::store::{LineStore, StoreError};

use super::ServiceError;

/// Owns line entities: creation, listing, lookup, update, deletion.
pub struct LineService<S> {
    store: Arc<S>,
}

impl<S: LineStore> LineService<S> {
    /// Create a new service on top of the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a line with a unique name and a display color.
    pub fn create(&self, name: &str, color: &str) -> Result<Line, ServiceError> {
        let name = LineName::parse(name)?;
        let color = LineColor::parse(color)?;
        let line = self
            .store
            .insert_line(name, color)
            .map_err(map_store_error)?;

        tracing::info!(id = line.id.0, name = %line.name, "created line");
        Ok(line)
    }

    /// All current lines, ordered by id.
    pub fn list(&self) -> Vec<Line> {
        self.store.lines()
    }

    /// Fetch a single line by id.
    pub fn get(&self, id: LineId) -> Result<Line, ServiceError> {
        self.store.line(id).map_err(map_store_error)
    }

    /// Overwrite a line's name and color and return the updated entity.
    ///
    /// Keeping the current name while changing the color is the common
    /// case and must succeed; only a name held by a *different* line is
    /// rejected.
    pub fn update(&self, id: LineId, name: &str, color: &str) -> Result<Line, ServiceError> {
        let name = LineName::parse(name)?;
        let color = LineColor::parse(color)?;
        self.store
            .update_line(id, name, color)
            .map_err(map_store_error)
    }

    /// Delete a line permanently.
    pub fn delete(&self, id: LineId) -> Result<(), ServiceError> {
        self.store.remove_line(id).map_err(map_store_error)
    }
}

fn map_store_error(err: StoreError) -> ServiceError {
    match err {
        StoreError::DuplicateName(name) => ServiceError::DuplicateName {
            resource: "line",
            name,
        },
        StoreError::RowNotFound(id) => ServiceError::NotFound { resource: "line", id },
    }
}
