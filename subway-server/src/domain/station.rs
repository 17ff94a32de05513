//! Station entity and its validated name type.

use std::fmt;

use chrono::{DateTime, Utc};

use super::StationId;

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationName {
    reason: &'static str,
}

/// A validated station name.
///
/// Station names are unique across the network and must not be blank.
/// Construction trims surrounding whitespace and preserves the interior
/// verbatim, so non-ASCII names work as-is.
///
/// # Examples
///
/// ```
/// use subway_server::domain::StationName;
///
/// let gangnam = StationName::parse("강남역").unwrap();
/// assert_eq!(gangnam.as_str(), "강남역");
///
/// // Surrounding whitespace is trimmed
/// assert_eq!(StationName::parse("  역삼역 ").unwrap().as_str(), "역삼역");
///
/// // Blank input is rejected
/// assert!(StationName::parse("").is_err());
/// assert!(StationName::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationName(String);

impl StationName {
    /// Parse a station name from a string.
    ///
    /// The input must contain at least one non-whitespace character.
    pub fn parse(s: &str) -> Result<Self, InvalidStationName> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidStationName {
                reason: "must not be blank",
            });
        }

        Ok(StationName(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A subway station.
///
/// Plain CRUD record: created with a unique name, deleted by id. There
/// is no update operation for stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Store-allocated identifier, immutable after creation.
    pub id: StationId,

    /// Unique station name.
    pub name: StationName,

    /// When the station was created.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_names() {
        assert!(StationName::parse("강남역").is_ok());
        assert!(StationName::parse("역삼역").is_ok());
        assert!(StationName::parse("King's Cross").is_ok());
        assert!(StationName::parse("x").is_ok());
    }

    #[test]
    fn reject_blank() {
        assert!(StationName::parse("").is_err());
        assert!(StationName::parse(" ").is_err());
        assert!(StationName::parse("\t\n").is_err());
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let name = StationName::parse("  강남역  ").unwrap();
        assert_eq!(name.as_str(), "강남역");
    }

    #[test]
    fn interior_whitespace_is_preserved() {
        let name = StationName::parse("St Pancras International").unwrap();
        assert_eq!(name.as_str(), "St Pancras International");
    }

    #[test]
    fn display() {
        let name = StationName::parse("강남역").unwrap();
        assert_eq!(format!("{}", name), "강남역");
    }

    #[test]
    fn debug() {
        let name = StationName::parse("강남역").unwrap();
        assert_eq!(format!("{:?}", name), "StationName(강남역)");
    }

    #[test]
    fn equality() {
        let a = StationName::parse("강남역").unwrap();
        let b = StationName::parse("강남역").unwrap();
        let c = StationName::parse("역삼역").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn error_display() {
        let err = StationName::parse("").unwrap_err();
        assert_eq!(err.to_string(), "invalid station name: must not be blank");
    }
}
