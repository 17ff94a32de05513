//! In-memory store.
//!
//! Rows live in id-ordered tables behind a single `RwLock`. Holding the
//! write lock across check-then-insert is what enforces the name
//! uniqueness invariant under concurrent requests, the same way a
//! unique constraint would in a relational backend.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::domain::{Line, LineColor, LineId, LineName, Station, StationId, StationName};

use super::{LineStore, StationStore, StoreError};

/// One entity table: id-ordered rows plus the id allocation counter.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<u64, T>,
    last_id: u64,
}

// Derived Default would demand T: Default, which the entities don't have.
impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    /// Allocate the next id. Ids start at 1 and are never handed out
    /// twice, so deleted ids stay retired for the process lifetime.
    fn allocate(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }
}

#[derive(Debug, Default)]
struct Tables {
    stations: Table<Station>,
    lines: Table<Line>,
}

/// Shared in-memory store for both services.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // Nothing panics while the lock is held, so a poisoned lock still
    // guards consistent tables; recover the guard instead of
    // propagating a panic from another thread.
    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StationStore for MemoryStore {
    fn insert_station(&self, name: StationName) -> Result<Station, StoreError> {
        let mut tables = self.write();

        if tables.stations.rows.values().any(|s| s.name == name) {
            return Err(StoreError::DuplicateName(name.as_str().to_string()));
        }

        let id = tables.stations.allocate();
        let station = Station {
            id: StationId(id),
            name,
            created_at: Utc::now(),
        };
        tables.stations.rows.insert(id, station.clone());

        Ok(station)
    }

    fn stations(&self) -> Vec<Station> {
        self.read().stations.rows.values().cloned().collect()
    }

    fn remove_station(&self, id: StationId) -> Result<(), StoreError> {
        let mut tables = self.write();
        tables
            .stations
            .rows
            .remove(&id.0)
            .map(|_| ())
            .ok_or(StoreError::RowNotFound(id.0))
    }
}

impl LineStore for MemoryStore {
    fn insert_line(&self, name: LineName, color: LineColor) -> Result<Line, StoreError> {
        let mut tables = self.write();

        if tables.lines.rows.values().any(|l| l.name == name) {
            return Err(StoreError::DuplicateName(name.as_str().to_string()));
        }

        let id = tables.lines.allocate();
        let now = Utc::now();
        let line = Line {
            id: LineId(id),
            name,
            color,
            created_at: now,
            modified_at: now,
        };
        tables.lines.rows.insert(id, line.clone());

        Ok(line)
    }

    fn lines(&self) -> Vec<Line> {
        self.read().lines.rows.values().cloned().collect()
    }

    fn line(&self, id: LineId) -> Result<Line, StoreError> {
        self.read()
            .lines
            .rows
            .get(&id.0)
            .cloned()
            .ok_or(StoreError::RowNotFound(id.0))
    }

    fn update_line(
        &self,
        id: LineId,
        name: LineName,
        color: LineColor,
    ) -> Result<Line, StoreError> {
        let mut tables = self.write();

        if !tables.lines.rows.contains_key(&id.0) {
            return Err(StoreError::RowNotFound(id.0));
        }

        // The row's own current name may be written back; only another
        // row holding the name is a conflict.
        if tables
            .lines
            .rows
            .iter()
            .any(|(&other, l)| other != id.0 && l.name == name)
        {
            return Err(StoreError::DuplicateName(name.as_str().to_string()));
        }

        let line = tables
            .lines
            .rows
            .get_mut(&id.0)
            .ok_or(StoreError::RowNotFound(id.0))?;
        line.name = name;
        line.color = color;
        line.modified_at = Utc::now();

        Ok(line.clone())
    }

    fn remove_line(&self, id: LineId) -> Result<(), StoreError> {
        let mut tables = self.write();
        tables
            .lines
            .rows
            .remove(&id.0)
            .map(|_| ())
            .ok_or(StoreError::RowNotFound(id.0))
    }
}
