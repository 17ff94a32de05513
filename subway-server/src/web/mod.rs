//! Web layer for the subway management service.
//!
//! Provides the HTTP endpoints for station and line CRUD.

mod dto;
mod routes;
mod state;


pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
