//! Service-level error types.

use crate::domain::{InvalidLineColor, InvalidLineName, InvalidStationName};

/// Errors surfaced by the station and line services.
///
/// Three kinds: a unique name is already taken, the requested entity
/// does not exist, or a request field failed validation (the latter via
/// the transparent parse-error variants).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The requested name is already held by another entity of the
    /// same kind.
    #[error("{resource} name already in use: {name}")]
    DuplicateName {
        resource: &'static str,
        name: String,
    },

    /// No entity of this kind with the requested id.
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: u64 },

    #[error(transparent)]
    InvalidStationName(#[from] InvalidStationName),

    #[error(transparent)]
    InvalidLineName(#[from] InvalidLineName),

    #[error(transparent)]
    InvalidLineColor(#[from] InvalidLineColor),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineColor, StationName};

    #[test]
    fn error_display() {
        let err = ServiceError::DuplicateName {
            resource: "station",
            name: "강남역".into(),
        };
        assert_eq!(err.to_string(), "station name already in use: 강남역");

        let err = ServiceError::NotFound {
            resource: "line",
            id: 7,
        };
        assert_eq!(err.to_string(), "line 7 not found");
    }

    #[test]
    fn parse_errors_display_transparently() {
        let err: ServiceError = StationName::parse("").unwrap_err().into();
        assert_eq!(err.to_string(), "invalid station name: must not be blank");

        let err: ServiceError = LineColor::parse(" ").unwrap_err().into();
        assert_eq!(err.to_string(), "invalid line color: must not be blank");
    }
}
