//! Line entity and its validated name and color types.

use std::fmt;

use chrono::{DateTime, Utc};

use super::LineId;

/// Error returned when parsing an invalid line name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line name: {reason}")]
pub struct InvalidLineName {
    reason: &'static str,
}

/// Error returned when parsing an invalid line color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line color: {reason}")]
pub struct InvalidLineColor {
    reason: &'static str,
}

/// A validated line name.
///
/// Line names are unique across the network and must not be blank.
/// Same trimming rules as [`StationName`](super::StationName).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LineName(String);

impl LineName {
    /// Parse a line name from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidLineName> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidLineName {
                reason: "must not be blank",
            });
        }

        Ok(LineName(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineName({})", self.0)
    }
}

impl fmt::Display for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated line color.
///
/// Colors are free-form display strings ("green", "bg-red-600"); the
/// only requirement is that they are not blank. Unlike names, colors
/// carry no uniqueness constraint and may change over a line's life.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LineColor(String);

impl LineColor {
    /// Parse a line color from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidLineColor> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidLineColor {
                reason: "must not be blank",
            });
        }

        Ok(LineColor(trimmed.to_string()))
    }

    /// Returns the color as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineColor({})", self.0)
    }
}

impl fmt::Display for LineColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A subway line.
///
/// Created with a unique name and a color; the update operation
/// overwrites both and advances `modified_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Store-allocated identifier, immutable after creation.
    pub id: LineId,

    /// Unique line name.
    pub name: LineName,

    /// Display color.
    pub color: LineColor,

    /// When the line was created.
    pub created_at: DateTime<Utc>,

    /// When the line was last updated. Equal to `created_at` until the
    /// first update.
    pub modified_at: DateTime<Utc>,
}
