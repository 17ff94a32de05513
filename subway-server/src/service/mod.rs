//! CRUD services for stations and lines.
//!
//! Services validate raw request input into domain types, delegate
//! persistence to the store traits, and classify failures into
//! [`ServiceError`] kinds for the web boundary to map onto status
//! codes.

mod error;
mod line;
mod station;

pub use error::ServiceError;
pub use line::LineService;
pub use station::StationService;
