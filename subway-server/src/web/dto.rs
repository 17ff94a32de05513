//! Data transfer objects for web requests and responses.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Line, Station};

/// Request to create a station.
#[derive(Debug, Deserialize)]
pub struct CreateStationRequest {
    /// Station name, unique across the network
    pub name: String,
}

/// Request to create a line.
#[derive(Debug, Deserialize)]
pub struct CreateLineRequest {
    /// Line name, unique across the network
    pub name: String,

    /// Display color (e.g., "green")
    pub color: String,
}

/// Request to update a line. Both fields are overwritten.
#[derive(Debug, Deserialize)]
pub struct UpdateLineRequest {
    /// New line name (may equal the current one)
    pub name: String,

    /// New display color
    pub color: String,
}

/// A station in API responses.
#[derive(Debug, Serialize)]
pub struct StationResponse {
    /// Store-allocated identifier
    pub id: u64,

    /// Station name
    pub name: String,

    /// Creation timestamp, RFC 3339
    pub created_at: String,
}

/// A line in API responses.
#[derive(Debug, Serialize)]
pub struct LineResponse {
    /// Store-allocated identifier
    pub id: u64,

    /// Line name
    pub name: String,

    /// Display color
    pub color: String,

    /// Creation timestamp, RFC 3339
    pub created_at: String,

    /// Last-update timestamp, RFC 3339
    pub modified_at: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl StationResponse {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.0,
            name: station.name.as_str().to_string(),
            created_at: format_timestamp(&station.created_at),
        }
    }
}

impl LineResponse {
    /// Create from a domain Line.
    pub fn from_line(line: &Line) -> Self {
        Self {
            id: line.id.0,
            name: line.name.as_str().to_string(),
            color: line.color.as_str().to_string(),
            created_at: format_timestamp(&line.created_at),
            modified_at: format_timestamp(&line.modified_at),
        }
    }
}

/// Format a timestamp as RFC 3339 with second precision ("...Z").
fn format_timestamp(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}
