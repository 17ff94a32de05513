//! Persistence layer for stations and lines.
//!
//! Services talk to storage through the [`StationStore`] and
//! [`LineStore`] traits; [`MemoryStore`] is the in-process
//! implementation backing both.

mod memory;

pub use memory::MemoryStore;

use crate::domain::{Line, LineColor, LineId, LineName, Station, StationId, StationName};

/// Errors from the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A row with the same unique name already exists.
    #[error("name already in use: {0}")]
    DuplicateName(String),

    /// No row with the requested id.
    #[error("no row with id {0}")]
    RowNotFound(u64),
}

/// Storage for station entities.
///
/// Implementations must serialize concurrent writes so that the name
/// uniqueness invariant holds across check-then-insert.
pub trait StationStore: Send + Sync {
    /// Insert a new station under a freshly allocated id.
    ///
    /// Fails with [`StoreError::DuplicateName`] if a station with the
    /// same name exists.
    fn insert_station(&self, name: StationName) -> Result<Station, StoreError>;

    /// All stations, ordered by ascending id.
    fn stations(&self) -> Vec<Station>;

    /// Remove a station permanently. Its id is never reused.
    fn remove_station(&self, id: StationId) -> Result<(), StoreError>;
}

/// Storage for line entities.
pub trait LineStore: Send + Sync {
    /// Insert a new line under a freshly allocated id.
    ///
    /// Fails with [`StoreError::DuplicateName`] if a line with the same
    /// name exists.
    fn insert_line(&self, name: LineName, color: LineColor) -> Result<Line, StoreError>;

    /// All lines, ordered by ascending id.
    fn lines(&self) -> Vec<Line>;

    /// Fetch a single line by id.
    fn line(&self, id: LineId) -> Result<Line, StoreError>;

    /// Overwrite a line's name and color and advance its modification
    /// timestamp.
    ///
    /// Fails with [`StoreError::DuplicateName`] if a *different* line
    /// already holds the name; writing a line's own current name back
    /// is allowed.
    fn update_line(
        &self,
        id: LineId,
        name: LineName,
        color: LineColor,
    ) -> Result<Line, StoreError>;

    /// Remove a line permanently. Its id is never reused.
    fn remove_line(&self, id: LineId) -> Result<(), StoreError>;
}
